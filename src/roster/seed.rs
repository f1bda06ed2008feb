//! Seed roster loaded at session start

use super::types::Customer;

/// The fixed starting book of business
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer::new("Summit Ridge Financial", 120_000, "Dane", 8.4)
            .email("contact@summitridgefinancial.com")
            .phone("(208) 555-1010")
            .address("123 Ridge Way, Boise, ID"),
        Customer::new("Pioneer Analytics Group", 89_000, "Dane", 7.1)
            .email("ops@pioneeranalytics.com")
            .phone("(208) 555-2020")
            .address("450 Pioneer Ave, Meridian, ID"),
        Customer::new("Evergreen Capital Advisors", 76_000, "Dane", 9.0)
            .email("service@evergreencapital.com")
            .phone("(208) 555-3030")
            .address("780 Evergreen Ln, Eagle, ID"),
        Customer::new("BluePeak Holdings", 105_000, "Dane", 6.8)
            .email("info@bluepeakholdings.com")
            .phone("(208) 555-4040")
            .address("62 BluePeak Dr, Boise, ID"),
        Customer::new("SilverLine Investment Partners", 94_000, "Dane", 8.2)
            .email("clientcare@silverlineinvest.com")
            .phone("(208) 555-5050")
            .address("19 Silverline Blvd, Nampa, ID"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_names_unique() {
        let customers = seed_customers();
        let names: HashSet<_> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(customers.len(), 5);
        assert_eq!(names.len(), customers.len());
    }

    #[test]
    fn test_seed_fully_populated() {
        for c in seed_customers() {
            assert!(!c.csm.is_empty());
            assert!(!c.email.is_empty());
            assert!(!c.phone.is_empty());
            assert!(!c.address.is_empty());
            assert!((0.0..=10.0).contains(&c.health_score));
        }
    }
}
