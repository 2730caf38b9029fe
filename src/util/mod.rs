pub mod async_help;
