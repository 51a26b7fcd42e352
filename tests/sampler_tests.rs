use rocket_space::distribution::{Distribution, IntOffsetDistribution, UniformDistribution};
use rocket_space::sampler::Sampler;
use rocket_space::sampler::random::RandomSampler;
use rocket_space::slot::Slot;
use rocket_space::space::{SampleSpace, SlotEntry, SpaceConfig};

/// Sampler that always picks the lowest attainable value.
struct LowSampler;

impl Sampler for LowSampler {
    fn sample(&self, _slot: Slot, distribution: &Distribution) -> f64 {
        distribution.bounds().0
    }
}

#[test]
fn draws_respect_every_descriptor() {
    let space = SampleSpace::default();
    let sampler = RandomSampler::with_seed(42);

    for _ in 0..500 {
        let values = space.draw(&sampler).unwrap();
        assert_eq!(values.len(), 22);
        for ((slot, entry), value) in space.iter().zip(&values) {
            if let SlotEntry::Learn(dist) = entry {
                assert!(dist.contains(*value), "{slot}: {value} not in {dist:?}");
            }
        }
    }
}

#[test]
fn draws_follow_custom_distribution() {
    let narrow = Distribution::Uniform(UniformDistribution {
        low: 4.0,
        high: 6.0,
    });
    let space = SpaceConfig::new().learn_from(Slot::Radius, narrow).build();
    let sampler = RandomSampler::with_seed(11);

    for _ in 0..200 {
        let values = space.draw(&sampler).unwrap();
        let radius = values[Slot::Radius.index()];
        assert!((4.0..=6.0).contains(&radius), "radius {radius}");
    }
}

#[test]
fn invalid_custom_distribution_blocks_draw() {
    let space = SpaceConfig::new()
        .learn_from(
            Slot::FinShape,
            Distribution::IntOffset(IntOffsetDistribution {
                n: 3,
                offset: i64::MAX,
            }),
        )
        .build();
    assert!(space.draw(&RandomSampler::with_seed(1)).is_err());
}

#[test]
fn pinned_slots_are_copied_verbatim() {
    let space = SpaceConfig::new()
        .fix(Slot::Radius, 7.5)
        .fix(Slot::FinCount, 4.0)
        .build();
    let sampler = RandomSampler::with_seed(3);

    for _ in 0..20 {
        let values = space.draw(&sampler).unwrap();
        assert!((values[Slot::Radius.index()] - 7.5).abs() < f64::EPSILON);
        assert!((values[Slot::FinCount.index()] - 4.0).abs() < f64::EPSILON);
        assert!((values[Slot::DryMass.index()] - 65.0).abs() < f64::EPSILON);
    }
}

#[test]
fn same_seed_same_designs() {
    let space = SampleSpace::default();
    let a = RandomSampler::with_seed(99);
    let b = RandomSampler::with_seed(99);
    for _ in 0..10 {
        assert_eq!(space.draw_design(&a).unwrap(), space.draw_design(&b).unwrap());
    }
}

#[test]
fn custom_sampler_drives_space() {
    let design = SampleSpace::default().draw_design(&LowSampler).unwrap();
    assert!((design.radius - 2.0).abs() < f64::EPSILON);
    assert!((design.fin_root_chord - 2.0).abs() < 1e-9);
    assert!((design.fin_count - 3.0).abs() < f64::EPSILON);
    assert!((design.fin_shape - 1.0).abs() < f64::EPSILON);
    assert!(design.fin_te_len.is_some());
}

#[test]
fn sampler_works_through_trait_object() {
    let sampler: Box<dyn Sampler> = Box::new(RandomSampler::with_seed(5));
    let values = SampleSpace::default().draw(sampler.as_ref()).unwrap();
    assert_eq!(values.len(), 22);
}

#[test]
fn fin_count_draws_both_options() {
    let space = SampleSpace::default();
    let sampler = RandomSampler::with_seed(8);
    let mut counts = [0u32; 2];
    for _ in 0..400 {
        let design = space.draw_design(&sampler).unwrap();
        if (design.fin_count - 3.0).abs() < f64::EPSILON {
            counts[0] += 1;
        } else {
            counts[1] += 1;
        }
    }
    assert!(counts[0] > 100 && counts[1] > 100, "{counts:?}");
}
