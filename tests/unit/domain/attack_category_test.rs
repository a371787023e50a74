// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use netscan::domain::models::attack::AttackCategory;
use netscan::domain::services::confidence::generate_confidence;
use netscan::domain::services::label_extractor::extract_attack_label;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_every_code_decodes_to_a_named_category() {
    let names: Vec<&str> = (0..10)
        .map(|code| AttackCategory::from_code(code).as_str())
        .collect();

    assert_eq!(
        names,
        vec![
            "Benign",
            "backdoor",
            "ddos",
            "dos",
            "injection",
            "mitm",
            "password",
            "ransomware",
            "scanning",
            "xss"
        ]
    );
    assert_eq!(AttackCategory::from_code(10), AttackCategory::Unknown);
    assert_eq!(AttackCategory::from_code(-1), AttackCategory::Unknown);
}

#[test]
fn test_confidence_stays_in_category_range() {
    let mut rng = StdRng::seed_from_u64(7);

    for category in AttackCategory::KNOWN
        .into_iter()
        .chain(std::iter::once(AttackCategory::Unknown))
    {
        let (min, max) = category.confidence_range();
        for _ in 0..50 {
            let value = generate_confidence(category, &mut rng);
            assert!(
                (min..=max).contains(&value),
                "{} produced {}",
                category,
                value
            );
        }
    }
}

#[test]
fn test_label_taken_from_last_row() {
    let csv = b"Flow ID,Num Attack\nf1,1\nf2,4\nf3,7\n";

    let extraction = extract_attack_label(csv, "Num Attack").unwrap();
    assert_eq!(extraction.category, AttackCategory::Ransomware);
    assert_eq!(extraction.raw_value.as_deref(), Some("7"));
    assert_eq!(extraction.row_count, 3);
}
