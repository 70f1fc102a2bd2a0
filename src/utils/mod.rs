pub mod catalog;
pub mod config;
pub mod formatter;
pub mod gateway;
pub mod news_client;
pub mod query_builder;
pub mod state;
pub mod validator;
