//! Membership pricing table. All amounts are ZAR cents.

/// One-time charge added to the first payment of every paid plan.
pub const JOINING_FEE: i64 = 9000;

/// Fixed price of a court booking.
pub const BOOKING_FEE: i64 = 15000;

pub const CURRENCY: &str = "ZAR";

/// Plan key of the free league registration path.
pub const LEAGUE_PLAN: &str = "league";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanPrice {
    pub monthly: i64,
    pub description: &'static str,
}

/// Resolves the composite plan key used by the pricing table. The league
/// plan has no billing cycle; every other plan defaults to monthly billing.
pub fn resolve_plan_key(plan: &str, billing_cycle: Option<&str>) -> String {
    if plan == LEAGUE_PLAN {
        LEAGUE_PLAN.to_string()
    } else {
        format!("{}-{}", plan, billing_cycle.unwrap_or("monthly"))
    }
}

pub fn plan_price(key: &str) -> Option<PlanPrice> {
    let price = match key {
        "adult-monthly" => PlanPrice { monthly: 15000, description: "Adult Pro - Monthly (R150/mo)" },
        "adult-annual" => PlanPrice { monthly: 12000, description: "Adult Pro - Annual (R120/mo billed annually)" },
        "masters-monthly" => PlanPrice { monthly: 12000, description: "Masters - Monthly (R120/mo)" },
        "masters-annual" => PlanPrice { monthly: 9500, description: "Masters - Annual (R95/mo billed annually)" },
        "junior-monthly" => PlanPrice { monthly: 7500, description: "Junior - Monthly (R75/mo)" },
        "junior-annual" => PlanPrice { monthly: 6000, description: "Junior - Annual (R60/mo billed annually)" },
        LEAGUE_PLAN => PlanPrice { monthly: 0, description: "League Registration (Free / First Match Fee)" },
        _ => return None,
    };
    Some(price)
}

/// First payment = monthly rate + joining fee, except the free league path.
pub fn first_payment_amount(plan_key: &str, monthly: i64) -> i64 {
    if plan_key == LEAGUE_PLAN {
        0
    } else {
        monthly + JOINING_FEE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_composite_plan_keys() {
        assert_eq!(resolve_plan_key("adult", Some("annual")), "adult-annual");
        assert_eq!(resolve_plan_key("junior", None), "junior-monthly");
        assert_eq!(resolve_plan_key("league", Some("annual")), "league");
    }

    #[test]
    fn every_paid_plan_adds_the_joining_fee() {
        for key in [
            "adult-monthly",
            "adult-annual",
            "masters-monthly",
            "masters-annual",
            "junior-monthly",
            "junior-annual",
        ] {
            let price = plan_price(key).unwrap();
            assert_eq!(
                first_payment_amount(key, price.monthly),
                price.monthly + JOINING_FEE,
                "unexpected first payment for {}",
                key
            );
        }
    }

    #[test]
    fn league_is_free() {
        let price = plan_price(LEAGUE_PLAN).unwrap();
        assert_eq!(price.monthly, 0);
        assert_eq!(first_payment_amount(LEAGUE_PLAN, price.monthly), 0);
    }

    #[test]
    fn unknown_keys_have_no_price() {
        assert!(plan_price("adult-weekly").is_none());
        assert!(plan_price("senior-monthly").is_none());
        assert!(plan_price("").is_none());
    }
}
