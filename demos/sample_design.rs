//! Draw a few random designs from each preset space and print them.
//!
//! Run with: `cargo run --example sample_design`

use rocket_space::prelude::*;

fn main() -> Result<()> {
    let sampler = RandomSampler::with_seed(2024);

    for preset in Preset::ALL {
        let space = preset.space();
        println!(
            "== {preset}: {} learnable, {} fixed",
            space.n_learnable(),
            space.n_fixed()
        );

        for _ in 0..2 {
            let design = space.draw_design(&sampler)?;
            for (key, value) in design.to_kwargs() {
                match value {
                    Some(v) => println!("  {key:>16} = {v:.3}"),
                    None => println!("  {key:>16} = -"),
                }
            }
            println!();
        }
    }

    // Describe what each slot means and how it is drawn.
    for (slot, entry) in SampleSpace::default().iter() {
        let how = match entry {
            SlotEntry::Fixed(v) => format!("fixed {v}"),
            SlotEntry::Learn(dist) => {
                let (low, high) = dist.bounds();
                format!("{} [{low}, {high}]", dist.kind())
            }
        };
        println!("{:>2} {:<16} {:<24} {}", slot.index(), slot.name(), how, slot.description());
    }

    Ok(())
}
