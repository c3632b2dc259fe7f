//! Command decoding.

/// A decoded command line.
///
/// Decoded from one received line; consumed once by the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// `PAN_REL:<int>` - relative pan move in steps.
    PanRelative(i32),
    /// `TILT_REL:<int>` - relative tilt move in steps.
    TiltRelative(i32),
    /// `PAN_ABS:<int>` - move pan to an absolute position.
    PanAbsolute(i32),
    /// `TILT_ABS:<int>` - move tilt to an absolute position.
    TiltAbsolute(i32),
    /// `HOME_PAN` - home the pan axis.
    HomePan,
    /// `HOME_TILT` - home the tilt axis.
    HomeTilt,
    /// `HOME_ALL` - home pan, then tilt.
    HomeAll,
    /// `CENTER` - return both axes to position 0.
    Center,
    /// `GET_POS` - query both positions.
    GetPosition,
    /// `GET_STATUS` - query limit switches and homed flags.
    GetStatus,
    /// `PING` - liveness check.
    Ping,
    /// Anything else; echoed back in the error response.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Decode one line.
    ///
    /// Prefixed commands carry a numeric argument parsed with
    /// [`parse_decimal`]; range checking is entirely the motion
    /// executor's job, not the parser's.
    pub fn parse(line: &'a str) -> Self {
        if let Some(arg) = line.strip_prefix("PAN_REL:") {
            return Command::PanRelative(parse_decimal(arg));
        }
        if let Some(arg) = line.strip_prefix("TILT_REL:") {
            return Command::TiltRelative(parse_decimal(arg));
        }
        if let Some(arg) = line.strip_prefix("PAN_ABS:") {
            return Command::PanAbsolute(parse_decimal(arg));
        }
        if let Some(arg) = line.strip_prefix("TILT_ABS:") {
            return Command::TiltAbsolute(parse_decimal(arg));
        }

        match line {
            "HOME_PAN" => Command::HomePan,
            "HOME_TILT" => Command::HomeTilt,
            "HOME_ALL" => Command::HomeAll,
            "CENTER" => Command::Center,
            "GET_POS" => Command::GetPosition,
            "GET_STATUS" => Command::GetStatus,
            "PING" => Command::Ping,
            _ => Command::Unknown(line),
        }
    }
}

/// Best-effort signed decimal parse, `atoi`-style.
///
/// Skips leading spaces, accepts an optional sign, then consumes
/// leading digits; the first non-digit terminates. Empty or
/// non-numeric input yields 0. This leniency is intentional wire
/// behavior: a malformed argument silently becomes a zero-step
/// command rather than an error.
pub fn parse_decimal(s: &str) -> i32 {
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }

    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    let mut value: i32 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = (bytes[i] - b'0') as i32;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
        i += 1;
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_commands() {
        assert_eq!(Command::parse("PAN_REL:50"), Command::PanRelative(50));
        assert_eq!(Command::parse("TILT_REL:-120"), Command::TiltRelative(-120));
        assert_eq!(Command::parse("PAN_ABS:4200"), Command::PanAbsolute(4200));
        assert_eq!(Command::parse("TILT_ABS:-5"), Command::TiltAbsolute(-5));
    }

    #[test]
    fn test_bare_commands() {
        assert_eq!(Command::parse("HOME_PAN"), Command::HomePan);
        assert_eq!(Command::parse("HOME_TILT"), Command::HomeTilt);
        assert_eq!(Command::parse("HOME_ALL"), Command::HomeAll);
        assert_eq!(Command::parse("CENTER"), Command::Center);
        assert_eq!(Command::parse("GET_POS"), Command::GetPosition);
        assert_eq!(Command::parse("GET_STATUS"), Command::GetStatus);
        assert_eq!(Command::parse("PING"), Command::Ping);
    }

    #[test]
    fn test_unknown_keeps_original_text() {
        assert_eq!(Command::parse("FOO_BAR"), Command::Unknown("FOO_BAR"));
        // A bare literal with trailing text is not that command.
        assert_eq!(Command::parse("PING "), Command::Unknown("PING "));
        assert_eq!(Command::parse("home_pan"), Command::Unknown("home_pan"));
    }

    #[test]
    fn test_malformed_argument_becomes_zero() {
        // Intentional: not a parse error, a zero-step command.
        assert_eq!(Command::parse("PAN_REL:abc"), Command::PanRelative(0));
        assert_eq!(Command::parse("PAN_REL:"), Command::PanRelative(0));
        assert_eq!(Command::parse("TILT_REL:--5"), Command::TiltRelative(0));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0"), 0);
        assert_eq!(parse_decimal("42"), 42);
        assert_eq!(parse_decimal("-42"), -42);
        assert_eq!(parse_decimal("+7"), 7);
        assert_eq!(parse_decimal("  13"), 13);
        assert_eq!(parse_decimal("12ab"), 12);
        assert_eq!(parse_decimal("ab12"), 0);
        assert_eq!(parse_decimal(""), 0);
        assert_eq!(parse_decimal("-"), 0);
    }

    #[test]
    fn test_parse_decimal_extremes() {
        assert_eq!(parse_decimal("2147483647"), i32::MAX);
        assert_eq!(parse_decimal("-2147483648"), i32::MIN);
        // Out-of-range input saturates instead of wrapping.
        assert_eq!(parse_decimal("99999999999"), i32::MAX);
        assert_eq!(parse_decimal("-99999999999"), i32::MIN);
    }
}
