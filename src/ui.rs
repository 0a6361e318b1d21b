//! Terminal output for the docrag binary

use colored::*;
use std::io::{self, BufRead, IsTerminal, Write};

use docrag_core::VectorIndex;
use docrag_rag::{Answer, Chunk, FlatL2Index, IndexStore};

pub fn display_banner(chunks: usize, dimension: usize) {
    println!();
    println!("{}", "docrag - ask questions about your document".blue().bold());
    println!(
        "{}",
        format!("{} chunks indexed, {} dimensions", chunks, dimension).dimmed()
    );
    println!("{}", "Type a question, or 'exit' to quit".dimmed());
    println!();
}

/// Next line from stdin, trimmed; `None` at end of input
pub fn read_query() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("{} ", "docrag>".green().bold());
        io::stdout().flush()?;
    }

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn print_answer(answer: &Answer) {
    println!("{}", "Answer:".bold());
    println!("{}", answer.answer);
    println!();
    print_context(&answer.context);
}

pub fn print_context(context: &[Chunk]) {
    println!("{}", "Context:".bold());
    for chunk in context {
        println!("  {} {}", "-".cyan(), chunk);
    }
}

pub fn print_index_summary(store: &IndexStore, index: &FlatL2Index, chunks: usize) {
    println!(
        "{} {} chunks, {} dimensions",
        "Index ready:".green().bold(),
        chunks,
        index.dimension()
    );
    println!("  {} {}", "index:".dimmed(), store.index_path().display());
    println!("  {} {}", "mapping:".dimmed(), store.mapping_path().display());
}
