/// Label for the XP popup: explicit plus sign for gains, minus sign kept for
/// (hypothetical) negative deltas.
#[must_use]
pub fn format_xp_delta(delta: i64) -> String {
    if delta >= 0 {
        format!("+{delta} XP")
    } else {
        format!("{delta} XP")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gains_carry_a_plus_sign() {
        assert_eq!(format_xp_delta(60), "+60 XP");
        assert_eq!(format_xp_delta(0), "+0 XP");
    }

    #[test]
    fn losses_keep_their_minus_sign() {
        assert_eq!(format_xp_delta(-5), "-5 XP");
    }
}
