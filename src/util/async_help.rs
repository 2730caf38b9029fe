use std::io;

use tokio::runtime;

/// The seeder does one request at a time, so a single-threaded runtime is enough.
pub fn get_blocking_runtime() -> io::Result<runtime::Runtime> {
    runtime::Builder::new_current_thread()
        .enable_io()
        .enable_time()
        .build()
}

#[cfg(test)]
mod tests {
    use super::get_blocking_runtime;

    #[test]
    fn runtime_drives_futures_to_completion() {
        let rt = get_blocking_runtime().unwrap();
        assert_eq!(rt.block_on(async { 40 + 2 }), 42);
    }
}
