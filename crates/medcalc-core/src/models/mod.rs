pub mod metadata;
pub mod result;
pub mod specialty;
