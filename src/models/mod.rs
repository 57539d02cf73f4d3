pub mod company;
pub mod financial;
pub mod response;
