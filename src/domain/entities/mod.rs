pub mod review;
pub mod vector_record;
