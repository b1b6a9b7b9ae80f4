//! Cross-crate tests that drive a full sweep against real child processes.

#[cfg(test)]
mod sweep {
    mod integration;
}
