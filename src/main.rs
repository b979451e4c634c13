//! ddcheck binary
//!
//! A bare invocation launches the interactive terminal flow; `--test`
//! runs two sample non-interactive generations (one per language);
//! `--request` generates from a JSON request file.

use anyhow::{bail, Context, Result};
use clap::Parser;
use ddcheck::{
    assemble, generate_request, Category, ChecklistBuilder, DealType, DocumentEntry,
    GenerationRequest, Jurisdiction, Labels, Language, Priority, Sector,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

#[derive(Parser, Debug)]
#[command(
    name = "ddcheck",
    version,
    about = "Due diligence document checklist generator for M&A transactions"
)]
struct Cli {
    /// Run two sample non-interactive generations (EN and PT) and exit
    #[arg(long)]
    test: bool,

    /// Generate from a JSON request file instead of prompting
    #[arg(long, value_name = "FILE", conflicts_with = "test")]
    request: Option<PathBuf>,

    /// Directory for the generated workbook
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.test {
        run_samples(&cli.out_dir)
    } else if let Some(request_path) = &cli.request {
        run_request(request_path, &cli.out_dir)
    } else {
        run_interactive(&cli.out_dir)
    }
}

/// The two hardcoded sample generations, one per language.
fn run_samples(out_dir: &Path) -> Result<()> {
    println!("Running sample generations...");

    let path = ChecklistBuilder::new("TechVida Lda")
        .deal_type(DealType::ShareDeal)
        .sector(Sector::Technology)
        .jurisdiction(Jurisdiction::Portugal)
        .language(Language::En)
        .build()?
        .generate_in(out_dir)?;
    println!("Sample file generated: {}", path.display());

    let path_pt = ChecklistBuilder::new("Farma Saúde SA")
        .deal_type(DealType::Merger)
        .sector(Sector::Healthcare)
        .jurisdiction(Jurisdiction::Portugal)
        .language(Language::Pt)
        .build()?
        .generate_in(out_dir)?;
    println!("Sample file (PT) generated: {}", path_pt.display());

    Ok(())
}

fn run_request(request_path: &Path, out_dir: &Path) -> Result<()> {
    let json = std::fs::read_to_string(request_path)
        .with_context(|| format!("cannot read request file {}", request_path.display()))?;
    let request: GenerationRequest = serde_json::from_str(&json)
        .with_context(|| format!("invalid request file {}", request_path.display()))?;
    let path = generate_request(&request, out_dir)?;
    println!("{}", path.display());
    Ok(())
}

fn run_interactive(out_dir: &Path) -> Result<()> {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("   DUE DILIGENCE — DOCUMENT CHECKLIST GENERATOR");
    println!("{rule}");

    let language = {
        let idx = choose("Language / Idioma:", &["EN — English", "PT — Português"])?;
        Language::ALL[idx]
    };
    let en = language == Language::En;

    let deal_type = {
        let names: Vec<&str> = DealType::ALL.iter().map(|d| d.as_str()).collect();
        let idx = choose(
            if en { "Transaction type:" } else { "Tipo de transação:" },
            &names,
        )?;
        DealType::ALL[idx]
    };
    let sector = {
        let names: Vec<&str> = Sector::ALL.iter().map(|s| s.as_str()).collect();
        let idx = choose(if en { "Sector:" } else { "Setor:" }, &names)?;
        Sector::ALL[idx]
    };
    let jurisdiction = {
        let names: Vec<&str> = Jurisdiction::ALL.iter().map(|j| j.as_str()).collect();
        let idx = choose(if en { "Jurisdiction:" } else { "Jurisdição:" }, &names)?;
        Jurisdiction::ALL[idx]
    };
    let target = ask_text(if en {
        "Target company name"
    } else {
        "Nome da empresa-alvo"
    })?;

    let docs = assemble(deal_type, sector, language);
    let labels = Labels::for_language(language);
    print_preview(&docs, labels);

    let mut custom = Vec::new();
    if ask_yes_no(if en {
        "Add custom documents?"
    } else {
        "Adicionar documentos personalizados?"
    })? {
        custom = ask_custom_documents(language)?;
        println!(
            "\n  → {} custom document(s) added. New total: {}",
            custom.len(),
            docs.len() + custom.len()
        );
    }

    if !ask_yes_no(if en {
        "Generate Excel file?"
    } else {
        "Gerar ficheiro Excel?"
    })? {
        println!("\n  Cancelled.");
        return Ok(());
    }

    let path = ChecklistBuilder::new(&target)
        .deal_type(deal_type)
        .sector(sector)
        .jurisdiction(jurisdiction)
        .language(language)
        .custom_documents(custom)
        .build()?
        .generate_in(out_dir)?;
    let shown = path.canonicalize().unwrap_or(path);

    println!("\n{rule}");
    println!("  ✔ File generated: {}", shown.display());
    println!("{rule}");
    Ok(())
}

/// Displays a numbered menu and returns the chosen index. Re-prompts
/// until the input is a number within range.
fn choose(prompt: &str, options: &[&str]) -> Result<usize> {
    println!("\n{prompt}");
    for (i, option) in options.iter().enumerate() {
        println!("  [{}] {}", i + 1, option);
    }
    loop {
        let raw = read_trimmed("  > ")?;
        match raw.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => {
                println!("  ✔ {}", options[n - 1]);
                return Ok(n - 1);
            }
            _ => println!("  ✗ Please enter a number between 1 and {}.", options.len()),
        }
    }
}

/// Asks for free text, re-prompting until it is non-empty.
fn ask_text(prompt: &str) -> Result<String> {
    loop {
        let value = read_trimmed(&format!("\n{prompt}: "))?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("  ✗ This field cannot be empty.");
    }
}

/// Asks a yes/no question, accepting EN and PT answers.
fn ask_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let value = read_trimmed(&format!("\n{prompt} (y/n): "))?.to_lowercase();
        match value.as_str() {
            "y" | "yes" | "s" | "sim" => return Ok(true),
            "n" | "no" | "nao" | "não" => return Ok(false),
            _ => println!("  ✗ Please answer y or n."),
        }
    }
}

fn read_trimmed(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input ended before the flow completed");
    }
    Ok(line.trim().to_string())
}

/// Prints an aligned preview of the assembled list. Display names are
/// truncated at 46 columns; widths are measured with `unicode-width` so
/// accented Portuguese names stay aligned.
fn print_preview(docs: &[DocumentEntry], labels: &Labels) {
    let rule = "=".repeat(90);
    let headers = &labels.headers;
    println!("\n{rule}");
    println!("  {:^86}", "PREVIEW");
    println!("{rule}");
    println!(
        "  {} {} {} {}",
        pad(headers[0], 14),
        pad(headers[1], 46),
        pad(headers[2], 10),
        headers[3]
    );
    println!("{}", "-".repeat(90));
    for doc in docs {
        println!(
            "  {} {} {} {}",
            pad(doc.category.as_str(), 14),
            pad(&truncate_name(&doc.name), 46),
            pad(doc.required_label(), 10),
            doc.priority
        );
    }
    println!("{}", "-".repeat(90));
    println!("  Total: {} documents", docs.len());
    println!("{rule}");
}

fn pad(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

fn truncate_name(name: &str) -> String {
    if name.width() <= 46 {
        return name.to_string();
    }
    let mut truncated = String::new();
    for c in name.chars() {
        if truncated.width() >= 43 {
            break;
        }
        truncated.push(c);
    }
    truncated.push_str("...");
    truncated
}

/// Collects ad hoc documents: category and priority from menus, free
/// text for the name, yes/no for the required flag. Entries are appended
/// to the checklist verbatim, after the sorted section.
fn ask_custom_documents(language: Language) -> Result<Vec<DocumentEntry>> {
    let en = language == Language::En;
    let prompt_cat = if en { "Category" } else { "Categoria" };
    let prompt_name = if en { "Document name" } else { "Nome do documento" };
    let prompt_req = if en { "Required?" } else { "Obrigatório?" };
    let prompt_more = if en {
        "Add another document?"
    } else {
        "Adicionar outro documento?"
    };
    let category_names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let priority_names: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();

    let mut custom = Vec::new();
    loop {
        println!();
        let category = Category::ALL[choose(&format!("  {prompt_cat}:"), &category_names)?];
        let name = ask_text(&format!("  {prompt_name}"))?;
        let required = ask_yes_no(&format!("  {prompt_req}"))?;
        let priority = Priority::ALL[choose("  Priority:", &priority_names)?];

        println!("  ✔ Added: {name}");
        custom.push(DocumentEntry::new(category, name, required, priority));

        if !ask_yes_no(&format!("  {prompt_more}"))? {
            break;
        }
    }
    Ok(custom)
}
