use crate::models::FreelancerProfile;

/// Heuristic estimate coefficients: start from the historical mean
/// satisfaction and adjust for rating, tenure, price and activity.
const BASE: f64 = 65.0;
const RATING_WEIGHT: f64 = 8.0;
const EXPERIENCE_WEIGHT: f64 = 0.5;
const RATE_PENALTY: f64 = 0.1;
const ACTIVE_BONUS: f64 = 5.0;

/// Model-free satisfaction estimate, used when inference is unavailable.
///
/// estimate = 65 + rating*8 + experience*0.5 - hourly_rate*0.1 (+5 if active),
/// clamped to [0, 100].
pub fn fallback_estimate(profile: &FreelancerProfile) -> f64 {
    let mut estimate = BASE + profile.client_rating * RATING_WEIGHT
        + profile.years_experience as f64 * EXPERIENCE_WEIGHT
        - profile.hourly_rate as f64 * RATE_PENALTY;

    if profile.is_active {
        estimate += ACTIVE_BONUS;
    }

    estimate.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Gender, Language, Skill};

    fn profile(rating: f64, experience: u8, rate: u16, active: bool) -> FreelancerProfile {
        FreelancerProfile {
            age: 30,
            gender: Gender::Male,
            country: Country::USA,
            primary_language: Language::English,
            primary_skill: Skill::WebDevelopment,
            years_experience: experience,
            hourly_rate: rate,
            client_rating: rating,
            is_active: active,
        }
    }

    #[test]
    fn test_fallback_formula_exact() {
        // 65 + 4*8 + 10*0.5 - 50*0.1 = 97, +5 active = clamped 100
        let estimate = fallback_estimate(&profile(4.0, 10, 50, false));
        assert_eq!(estimate, 97.0);
    }

    #[test]
    fn test_fallback_clamps_high() {
        // 65 + 40 + 5 - 5 + 5 = 110 -> 100
        let estimate = fallback_estimate(&profile(5.0, 10, 50, true));
        assert_eq!(estimate, 100.0);
    }

    #[test]
    fn test_fallback_clamps_low() {
        // 65 + 0 + 0 - 50 = 15; cannot go below zero even at max rate
        let estimate = fallback_estimate(&profile(0.0, 0, 500, false));
        assert_eq!(estimate, 15.0);
        assert!(estimate >= 0.0);
    }

    #[test]
    fn test_active_bonus() {
        let idle = fallback_estimate(&profile(3.0, 5, 40, false));
        let active = fallback_estimate(&profile(3.0, 5, 40, true));
        assert_eq!(active - idle, 5.0);
    }
}
