pub mod db;
pub mod repo;
pub mod web;
pub mod quiz;
pub mod config;
pub mod filter;
pub mod pagination;
