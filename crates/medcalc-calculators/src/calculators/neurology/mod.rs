pub mod esus_criteria;
