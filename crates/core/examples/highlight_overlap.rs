//! Basic usage example of the copymatch alignment engine

use copymatch_core::{align, align_by_words, AlignConfig, AlignEngine, Alignment};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Copymatch Alignment Examples ===\n");

    // Example 1: Exact alignment of lightly edited copy
    example_exact_alignment();

    // Example 2: Word alignment of reordered copy
    example_word_alignment();

    // Example 3: Bounded input for long OCR output
    example_bounded_input();
}

fn render(alignment: &Alignment) -> String {
    let mut out = String::new();
    for segment in alignment {
        if segment.is_match {
            out.push('[');
            out.push_str(&segment.text);
            out.push(']');
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

fn example_exact_alignment() {
    println!("Example 1: Exact Alignment");
    println!("{}", LINE);

    let reference = "Save 50% on all premium services this weekend only!";
    let candidate = "Save 50% on all standard services next weekend only!";

    let alignment = align(reference, candidate);

    println!("Reference: {}", reference);
    println!("Candidate: {}", candidate);
    println!("Rendered:  {}", render(&alignment));
    println!("Summary:   {}\n", alignment);
}

fn example_word_alignment() {
    println!("Example 2: Word Alignment (reordered copy)");
    println!("{}", LINE);

    let reference = "Save 50% on premium services";
    let candidate = "Premium services: save 50%";

    let exact = align(reference, candidate);
    let loose = align_by_words(reference, candidate);

    println!("Reference: {}", reference);
    println!("Candidate: {}", candidate);
    println!("Exact:     {}", render(&exact));
    println!("Loose:     {}", render(&loose));
    println!(
        "Match fraction: exact {:.2}, loose {:.2}\n",
        exact.match_fraction(),
        loose.match_fraction()
    );
}

fn example_bounded_input() {
    println!("Example 3: Bounded Input");
    println!("{}", LINE);

    let reference = "Limited offer: free shipping on orders over $25.".repeat(40);
    let candidate = "Limited offer: free shipping on orders over $25, today only.".repeat(40);

    let engine = AlignEngine::new(AlignConfig::exact().with_max_input_chars(500));
    let alignment = engine.align(&reference, &candidate);

    println!("Candidate length: {} chars", candidate.chars().count());
    println!("Summary: {}", alignment);
    println!(
        "Reconstruction intact: {}\n",
        alignment.candidate_text() == candidate
    );
}
