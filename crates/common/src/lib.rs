//! Types and process helpers shared by the registry crates.

pub mod types;

pub mod utils {
    pub mod logging;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
        assert_eq!(serde_json::to_string(&h).ok().as_deref(), Some(r#"{"status":"ok"}"#));
    }
}
