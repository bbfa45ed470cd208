use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// Kind of biometric device a member can pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Wristband,
    Scale,
    Sensor,
}

impl DeviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Wristband => "wristband",
            DeviceKind::Scale => "scale",
            DeviceKind::Sensor => "sensor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wristband" => Some(DeviceKind::Wristband),
            "scale" => Some(DeviceKind::Scale),
            "sensor" => Some(DeviceKind::Sensor),
            _ => None,
        }
    }
}

/// A simulated biometric data source bound to one member
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    pub id: Uuid,
    pub kind: DeviceKind,
    pub member_id: Uuid,
    /// Last synced reading; empty until the first sync
    pub data: Map<String, Value>,
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl Device {
    pub fn new(kind: DeviceKind, member_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            member_id,
            data: Map::new(),
        }
    }

    /// Generate a synthetic reading shaped by the device kind
    pub fn collect_reading(&mut self) {
        let mut rng = rand::thread_rng();
        let mut data = Map::new();

        match self.kind {
            DeviceKind::Wristband => {
                data.insert("heart_rate".into(), json!(rng.gen_range(60..=120)));
                data.insert("steps".into(), json!(rng.gen_range(1000..=15000)));
                data.insert(
                    "calories".into(),
                    json!(round2(rng.gen_range(50.0..=300.0))),
                );
                data.insert(
                    "weight_lifted".into(),
                    json!(round1(rng.gen_range(1.0..=5.0))),
                );
                data.insert("repetitions".into(), json!(rng.gen_range(1..=5)));
                data.insert("exercise_seconds".into(), json!(rng.gen_range(300..=1800)));
            }
            DeviceKind::Scale => {
                data.insert("weight".into(), json!(round1(rng.gen_range(50.0..=100.0))));
                data.insert(
                    "body_fat_percent".into(),
                    json!(round1(rng.gen_range(10.0..=30.0))),
                );
                data.insert(
                    "muscle_mass".into(),
                    json!(round1(rng.gen_range(30.0..=50.0))),
                );
            }
            DeviceKind::Sensor => {
                data.insert("repetitions".into(), json!(rng.gen_range(5..=20)));
                data.insert(
                    "weight_lifted".into(),
                    json!(round1(rng.gen_range(10.0..=50.0))),
                );
                data.insert("exercise_seconds".into(), json!(rng.gen_range(30..=300)));
            }
        }

        data.insert("timestamp".into(), json!(Utc::now().to_rfc3339()));
        self.data = data;
    }

    /// Collect a reading only if none exists yet; repeated syncs keep the
    /// stored payload unchanged.
    pub fn sync(&mut self) {
        if self.data.is_empty() {
            self.collect_reading();
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterDeviceRequest {
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wristband_reading_shape() {
        let mut device = Device::new(DeviceKind::Wristband, Uuid::new_v4());
        device.collect_reading();

        for field in [
            "heart_rate",
            "steps",
            "calories",
            "weight_lifted",
            "repetitions",
            "exercise_seconds",
            "timestamp",
        ] {
            assert!(device.data.contains_key(field), "missing {field}");
        }

        let heart_rate = device.data["heart_rate"].as_i64().unwrap();
        assert!((60..=120).contains(&heart_rate));
    }

    #[test]
    fn test_scale_reading_shape() {
        let mut device = Device::new(DeviceKind::Scale, Uuid::new_v4());
        device.collect_reading();

        for field in ["weight", "body_fat_percent", "muscle_mass", "timestamp"] {
            assert!(device.data.contains_key(field), "missing {field}");
        }

        let weight = device.data["weight"].as_f64().unwrap();
        assert!((50.0..=100.0).contains(&weight));
    }

    #[test]
    fn test_sync_does_not_regenerate() {
        let mut device = Device::new(DeviceKind::Sensor, Uuid::new_v4());
        device.sync();
        let first = device.data.clone();
        device.sync();
        assert_eq!(first, device.data);
    }

    #[test]
    fn test_device_kind_parsing() {
        assert_eq!(DeviceKind::from_str("Wristband"), Some(DeviceKind::Wristband));
        assert_eq!(DeviceKind::from_str("scale"), Some(DeviceKind::Scale));
        assert_eq!(DeviceKind::from_str("treadmill"), None);
    }
}
