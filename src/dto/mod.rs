pub mod deserializers;
pub mod trivia_dto;
