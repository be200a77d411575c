//! Fixed values reported by the status endpoint

/// Value of the `status` field reported by `GET /`
pub const STATUS_RUNNING: &str = "Railway is running ✅";
