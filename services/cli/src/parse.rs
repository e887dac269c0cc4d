use internship_match::recommendation::{MAX_CGPA, MAX_SKILL_LEVEL, MIN_CGPA};

fn parse_number(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))
}

pub(crate) fn parse_cgpa(raw: &str) -> Result<f64, String> {
    let value = parse_number(raw)?;
    if (MIN_CGPA..=MAX_CGPA).contains(&value) {
        Ok(value)
    } else {
        Err(format!("CGPA must be between {MIN_CGPA:.1} and {MAX_CGPA:.1}"))
    }
}

pub(crate) fn parse_skill_level(raw: &str) -> Result<f64, String> {
    let value = parse_number(raw)?;
    if (0.0..=MAX_SKILL_LEVEL).contains(&value) {
        Ok(value)
    } else {
        Err(format!("skill levels must be between 0 and {MAX_SKILL_LEVEL}"))
    }
}

pub(crate) fn parse_positive(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("value must be greater than zero".to_string()),
        Ok(value) => Ok(value),
        Err(err) => Err(format!("failed to parse '{raw}' as a count ({err})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cgpa_bounds_are_inclusive() {
        assert_eq!(parse_cgpa("2.0"), Ok(2.0));
        assert_eq!(parse_cgpa(" 4.0 "), Ok(4.0));
        assert!(parse_cgpa("1.99").is_err());
        assert!(parse_cgpa("NaN").is_err());
        assert!(parse_cgpa("three").is_err());
    }

    #[test]
    fn skill_levels_stay_on_the_slider() {
        assert_eq!(parse_skill_level("0"), Ok(0.0));
        assert_eq!(parse_skill_level("100"), Ok(100.0));
        assert!(parse_skill_level("-1").is_err());
    }

    #[test]
    fn counts_must_be_positive() {
        assert_eq!(parse_positive("25"), Ok(25));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-3").is_err());
    }
}
