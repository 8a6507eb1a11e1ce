use serde::{Deserialize, Serialize, Serializer};

/// Liveness of the process. Only one value exists: a process that cannot
/// respond produces no status at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    #[default]
    #[serde(rename = "UP")]
    Up,
}

/// Reachability of the database as seen by the last probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DbStatus {
    Connected,
    Disconnected,
}

impl From<bool> for DbStatus {
    fn from(reachable: bool) -> Self {
        if reachable {
            DbStatus::Connected
        } else {
            DbStatus::Disconnected
        }
    }
}

/// Health report, built fresh for every request.
///
/// Serializes as `{"status":"UP","dbStatus":"Connected","uptime":"5s"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub db_status: DbStatus,
    /// Whole seconds since process start.
    #[serde(rename = "uptime", serialize_with = "serialize_uptime")]
    pub uptime_seconds: u64,
}

impl HealthStatus {
    pub fn new(db_status: DbStatus, uptime_seconds: u64) -> Self {
        Self {
            status: ServiceStatus::Up,
            db_status,
            uptime_seconds,
        }
    }
}

fn serialize_uptime<S: Serializer>(seconds: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{seconds}s"))
}
