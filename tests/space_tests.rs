use rocket_space::distribution::{
    CategoricalDistribution, Distribution, IntOffsetDistribution, QuantizedDistribution,
    UniformDistribution,
};
use rocket_space::slot::{SLOT_COUNT, Slot};
use rocket_space::space::{FixPolicy, SampleSpace, SlotEntry, SpaceConfig};

fn uniform(low: f64, high: f64) -> SlotEntry {
    SlotEntry::Learn(Distribution::Uniform(UniformDistribution { low, high }))
}

#[test]
fn default_space_matches_descriptor_table() {
    let space = SampleSpace::default();
    let expected = [
        SlotEntry::Fixed(65.0),
        SlotEntry::Fixed(15.0),
        uniform(2.0, 12.0),
        uniform(0.0, 1.0),
        uniform(2.0, 30.0),
        uniform(1.5, 4.0),
        uniform(0.0, 10.0),
        SlotEntry::Learn(Distribution::IntOffset(IntOffsetDistribution { n: 7, offset: 1 })),
        uniform(0.0, 2.0),
        uniform(0.0, 0.99),
        SlotEntry::Learn(Distribution::Categorical(CategoricalDistribution {
            options: vec![3.0, 4.0],
        })),
        uniform(0.0, 1.0),
        uniform(0.0, 1.0),
        uniform(0.0, 1.0),
        uniform(0.0, 1.0),
        SlotEntry::Learn(Distribution::Quantized(QuantizedDistribution {
            low: 1.0,
            high: 10.0,
            step: 1.0,
        })),
        uniform(0.0, 1.0),
        SlotEntry::Learn(Distribution::IntOffset(IntOffsetDistribution { n: 9, offset: 1 })),
        uniform(0.1, 1.0),
        uniform(0.1, 3.0),
        uniform(0.1, 3.0),
        SlotEntry::Learn(Distribution::Quantized(QuantizedDistribution {
            low: 1.0,
            high: 16.0,
            step: 1.0,
        })),
    ];

    assert_eq!(space.entries().len(), SLOT_COUNT);
    for (i, (entry, want)) in space.entries().iter().zip(expected.iter()).enumerate() {
        assert_eq!(entry, want, "slot {i} ({})", Slot::ALL[i]);
    }
}

#[test]
fn order_is_stable_for_any_pinned_subset() {
    // Walk a few different subsets; every slot keeps its position.
    for stride in 1..=5 {
        let config = Slot::ALL
            .into_iter()
            .step_by(stride)
            .fold(SpaceConfig::new(), |config, slot| config.fix(slot, 0.5));
        let space = config.build();

        assert_eq!(space.entries().len(), SLOT_COUNT);
        for (slot, entry) in space.iter() {
            match entry {
                SlotEntry::Fixed(v) => {
                    let expected = config.pinned(slot).or(slot.default_value()).unwrap();
                    assert!((v - expected).abs() < f64::EPSILON, "{slot}");
                }
                SlotEntry::Learn(dist) => {
                    assert_eq!(Some(dist), slot.default_distribution().as_ref(), "{slot}");
                }
            }
        }
    }
}

#[test]
fn pinned_values_pass_through_exactly() {
    let value = 1.234_567_890_123;
    for slot in Slot::ALL {
        let space = SpaceConfig::new().fix(slot, value).build();
        assert_eq!(space.entry(slot).fixed_value(), Some(value), "{slot}");
        assert_eq!(space.n_fixed(), if slot.default_value().is_some() { 2 } else { 3 });
    }
}

#[test]
fn explicit_policy_pins_zero() {
    let space = SpaceConfig::new()
        .fix(Slot::BoatLen, 0.0)
        .fix(Slot::NosePower, 0.0)
        .build();
    assert_eq!(space.entry(Slot::BoatLen), &SlotEntry::Fixed(0.0));
    assert_eq!(space.entry(Slot::NosePower), &SlotEntry::Fixed(0.0));
}

#[test]
fn truthy_policy_treats_zero_as_unset() {
    let space = SpaceConfig::new()
        .policy(FixPolicy::Truthy)
        .fix(Slot::BoatLen, 0.0)
        .fix(Slot::NosePower, 0.25)
        .build();
    assert_eq!(space.entry(Slot::BoatLen), &uniform(0.0, 10.0));
    assert_eq!(space.entry(Slot::NosePower), &SlotEntry::Fixed(0.25));
}

#[test]
fn learnable_lists_unpinned_slots_in_order() {
    let space = SpaceConfig::new()
        .fix(Slot::Radius, 6.0)
        .fix(Slot::FinShape, 2.0)
        .build();
    let learnable: Vec<Slot> = space.learnable().collect();
    assert_eq!(learnable.len(), 18);
    assert!(!learnable.contains(&Slot::Radius));
    assert!(!learnable.contains(&Slot::FinShape));
    assert!(learnable.windows(2).all(|w| w[0].index() < w[1].index()));
}

#[test]
fn config_converts_into_space() {
    let config = SpaceConfig::new().fix(Slot::NoseLen, 12.0);
    let space: SampleSpace = config.clone().into();
    assert_eq!(space, config.build());
}
