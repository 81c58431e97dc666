//! Display functions for game states and command results

use super::formatters::{answer_with_indices, create_progress_bar, format_letters};
use crate::commands::{BenchmarkResult, LookupResult};
use crate::engine::WordBuilderState;
use colored::Colorize;

/// Print a game state
pub fn print_state(state: &WordBuilderState) {
    let snapshot = state.current_state();

    println!("{}", "─".repeat(60).cyan());
    if snapshot.answer.is_empty() {
        println!("Answer:  {}", "(empty)".bright_black());
    } else {
        let (letters, indices) = answer_with_indices(&snapshot.answer);
        let letters = if snapshot.is_valid_word {
            letters.bright_green().bold()
        } else {
            letters.bright_yellow().bold()
        };
        println!("Answer:  {letters}");
        println!("         {}", indices.bright_black());
    }
    println!("Step:    {}", snapshot.step);
    println!("Prefix:  {}", format_letters(&snapshot.prefix_set).cyan());
    println!("Suffix:  {}", format_letters(&snapshot.suffix_set).cyan());

    if !snapshot.valid_completions.is_empty() {
        println!("Words:   {}", snapshot.valid_completions.join(", "));
    }
    if !snapshot.suggestion.is_empty() {
        println!("💡 {}", snapshot.suggestion.bright_black());
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of a fragment lookup
pub fn print_lookup_result(result: &LookupResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LOOKUP:".bright_cyan().bold(),
        result.fragment.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let membership = if result.is_word {
        "yes".green().bold()
    } else {
        "no".red()
    };
    println!("\n   Index:        {}", result.index_name);
    println!("   Is a word:    {membership}");

    println!(
        "\n📖 {} ({})",
        "Starts:".bright_cyan().bold(),
        result.total_prefix_matches
    );
    print_word_list(&result.prefix_matches, result.total_prefix_matches);
    println!(
        "\n📖 {} ({})",
        "Ends:".bright_cyan().bold(),
        result.total_suffix_matches
    );
    print_word_list(&result.suffix_matches, result.total_suffix_matches);

    println!("\n🔤 {}", "Letters around occurrences:".bright_cyan().bold());
    println!("   Before:  {}", format_letters(&result.groups.prepend));
    println!("   After:   {}", format_letters(&result.groups.append));

    println!("\n🧩 {}", "Containing words:".bright_cyan().bold());
    println!("   Append to reach:   {}", result.suggestions.append.len());
    println!("   Prepend to reach:  {}", result.suggestions.prepend.len());
    println!("   Inside or equal:   {}", result.suggestions.middle.len());
}

fn print_word_list(words: &[String], total: usize) {
    if words.is_empty() {
        println!("   {}", "(none)".bright_black());
        return;
    }
    println!("   {}", words.join(", "));
    if total > words.len() {
        println!("   {}", format!("… and {} more", total - words.len()).bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Transitions:      {}", result.transitions);
    println!(
        "   Average latency:  {}",
        format!("{:.3}ms", result.average_latency.as_secs_f64() * 1000.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Worst latency:    {}",
        format!("{:.3}ms", result.worst_latency.as_secs_f64() * 1000.0).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Transitions/sec:  {:.1}", result.transitions_per_second);

    println!("\n📈 {}", "Outcomes:".bright_cyan().bold());
    let total = result.transitions.max(1) as f64;
    for (label, count) in [("Words formed", result.words_formed), ("Dead ends", result.dead_ends)] {
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {label:<13} {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
