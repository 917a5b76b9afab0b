mod config;
mod field;
