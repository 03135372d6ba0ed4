mod app;
mod auth;
mod book;
mod config;
mod error;
mod portfolio;
mod runtime;
mod storage;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
