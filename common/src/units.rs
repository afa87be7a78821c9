//! Unit-system preference sent with every data request.

/// Whether the phone should resolve temperatures in metric or imperial
/// units. The watch never converts; the phone does.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Wire token understood by the phone app.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "celsius",
            Self::Imperial => "fahrenheit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_metric() {
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }

    #[test]
    fn test_wire_tokens() {
        assert_eq!(UnitSystem::Metric.as_str(), "celsius");
        assert_eq!(UnitSystem::Imperial.as_str(), "fahrenheit");
    }
}
