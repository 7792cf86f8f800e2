//! Logger module
//!
//! Stdout/stderr logging utilities for the HTTP server:
//! - Server lifecycle logging (startup banner)
//! - Access logging, gated by `logging.access_log`
//! - API request/status lines
//! - Error and warning logging

use std::net::SocketAddr;

use crate::config::Config;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Task board server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("API available at: http://{addr}/api/tasks"));
    write_info(&format!("Task file: {}", config.storage.tasks_file));
    write_info(&format!(
        "Frontend assets: {}",
        config.static_files.frontend_dir
    ));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("======================================\n");
}

pub fn log_request(method: &hyper::Method, uri: &hyper::Uri, version: hyper::Version) {
    write_info(&format!("[Request] {method} {uri} {version:?}"));
}

pub fn log_response(size: usize) {
    write_info(&format!("[Response] {size} bytes"));
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    write_info(&format!("[API] {method} {path} - {status}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
