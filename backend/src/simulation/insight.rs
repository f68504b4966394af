//! Insight text for a tuned result
//!
//! One sentence built from the policy's premium bias direction and the
//! long-haul economy hold, followed by what that does to penalties and
//! operational cost.

use super::transform::ScaleFactors;
use crate::policy::ValidParams;

pub(crate) fn tuned_insight(params: &ValidParams, factors: &ScaleFactors) -> String {
    let premium = if factors.premium_lift > 0.0 {
        "Tuned mix leans harder on premium cabins"
    } else if factors.premium_lift < 0.0 {
        "Tuned mix relaxes premium cabin priority"
    } else {
        "Tuned mix keeps the reference premium priority"
    };

    let economy = if params.hold_on_long().y {
        "trims long-haul economy"
    } else {
        "keeps moving long-haul economy"
    };

    let penalties = if factors.penalty_floored() {
        "penalties sit at their achievable floor"
    } else if factors.penalty_scale < 1.0 {
        "penalties fall"
    } else {
        "penalties hold"
    };

    let cost = if factors.operational_scale > 1.0 {
        "operational cost rises to protect premium capacity"
    } else if factors.operational_scale < 1.0 {
        "operational cost eases"
    } else {
        "cost stays in check"
    };

    format!("{} and {}; {} while {}.", premium, economy, penalties, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CabinClass;
    use crate::policy::{validate, PolicyParams};
    use crate::simulation::scale_factors;

    fn insight_for(params: &PolicyParams) -> String {
        let valid = validate(params).unwrap();
        tuned_insight(&valid, &scale_factors(&valid))
    }

    #[test]
    fn test_reference_policy_insight() {
        assert_eq!(
            insight_for(&PolicyParams::default()),
            "Tuned mix keeps the reference premium priority and trims long-haul economy; \
             penalties fall while cost stays in check."
        );
    }

    #[test]
    fn test_premium_heavy_policy_insight() {
        let params = PolicyParams::default()
            .with_bias(CabinClass::F, 1.6)
            .with_bias(CabinClass::J, 1.6)
            .with_hold_on_long(CabinClass::Y, false);
        assert_eq!(
            insight_for(&params),
            "Tuned mix leans harder on premium cabins and keeps moving long-haul economy; \
             penalties fall while operational cost rises to protect premium capacity."
        );
    }

    #[test]
    fn test_relaxed_premium_policy_insight() {
        let params = PolicyParams::default().with_bias(CabinClass::F, 0.6);
        let insight = insight_for(&params);
        assert!(insight.starts_with("Tuned mix relaxes premium cabin priority"));
        assert!(insight.ends_with("operational cost eases."));
    }

    #[test]
    fn test_floored_factors_insight() {
        let valid = validate(&PolicyParams::default()).unwrap();
        let factors = ScaleFactors {
            premium_lift: 0.3,
            econ_throttle: 0.08,
            penalty_scale: crate::simulation::PENALTY_SCALE_FLOOR,
            operational_scale: crate::simulation::OPERATIONAL_SCALE_FLOOR,
        };
        assert_eq!(
            tuned_insight(&valid, &factors),
            "Tuned mix leans harder on premium cabins and trims long-haul economy; \
             penalties sit at their achievable floor while operational cost eases."
        );
    }

    #[test]
    fn test_unscaled_penalties_insight() {
        let valid = validate(&PolicyParams::default()).unwrap();
        let factors = ScaleFactors {
            premium_lift: 0.0,
            econ_throttle: 0.08,
            penalty_scale: 1.0,
            operational_scale: 1.0,
        };
        let text = tuned_insight(&valid, &factors);
        assert!(text.contains("penalties hold while cost stays in check"));
    }
}
