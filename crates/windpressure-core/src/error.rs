use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },

    // not found, or not an f32
    #[error("data reference {name} unavailable: {message}")]
    DataRef {
        name: &'static str,
        message: String,
    },

    #[error("host refused {what}")]
    HostRefused { what: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    pub fn data_ref(name: &'static str, message: impl Into<String>) -> Self {
        Self::DataRef {
            name,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_ref_display() {
        let err = Error::data_ref("sim/weather/wind_speed_kt", "NotFound");
        assert_eq!(
            err.to_string(),
            "data reference sim/weather/wind_speed_kt unavailable: NotFound"
        );
    }

    #[test]
    fn test_host_refused_display() {
        let err = Error::HostRefused { what: "hotkey F1" };
        assert_eq!(err.to_string(), "host refused hotkey F1");
    }

    #[test]
    fn test_from_figment_error() {
        let err: Error = figment::Error::from("boom".to_string()).into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.to_string().contains("boom"));
    }
}
