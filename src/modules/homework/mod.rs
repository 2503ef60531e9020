pub mod schema;

pub use schema::HomeworkStatus;
