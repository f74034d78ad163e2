//! Financial Math CLI
//!
//! Usage:
//!   financial_math                 # full report, series written as CSV
//!   financial_math --no-export     # numbers only
//!   financial_math --validate      # run the validation battery
//!   financial_math --json          # report records as JSON

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use financial_math::{
    compound, loan, percentage, time_value, validation, CompoundResult, LoanResult,
    PercentageResult, TimeValueResult,
};

/// Financial Mathematics Toolkit
#[derive(Parser)]
#[command(name = "financial_math")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Skip writing growth series and schedules to CSV
    #[arg(long)]
    no_export: bool,

    /// Run the validation battery and exit non-zero on any failure
    #[arg(long)]
    validate: bool,

    /// Print the report records as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Amortization rows shown in the text report
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Directory for exported CSV files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Serialize)]
struct CompoundSection {
    result: CompoundResult,
    continuous_amount: f64,
    doubling_time: f64,
    rate_sweep: Vec<CompoundResult>,
    frequency_sweep: Vec<CompoundResult>,
    continuous_comparison: f64,
}

#[derive(Serialize)]
struct LoanSection {
    result: LoanResult,
    budget: f64,
    affordable_principal: f64,
    rate_comparison: Vec<LoanResult>,
}

#[derive(Serialize)]
struct TimeValueSection {
    amount: f64,
    analysis: TimeValueResult,
    annuity_payment: f64,
    fv_annuity: f64,
    pv_annuity: f64,
    cashflows: Vec<f64>,
    irr: Option<f64>,
}

#[derive(Serialize)]
struct PercentageSection {
    share: PercentageResult,
    value: f64,
    total: f64,
    change_up: f64,
    change_down: f64,
    margin: f64,
    markup: f64,
}

#[derive(Serialize)]
struct Report {
    compound: CompoundSection,
    loan: LoanSection,
    time_value: TimeValueSection,
    percentage: PercentageSection,
}

const SWEEP_RATES: [f64; 5] = [0.02, 0.05, 0.08, 0.10, 0.15];
const FREQUENCIES: [(u32, &str); 4] = [(1, "Annual"), (4, "Quarterly"), (12, "Monthly"), (365, "Daily")];
const LOAN_RATES: [f64; 5] = [0.12, 0.18, 0.24, 0.36, 0.48];

fn build_report() -> Result<Report> {
    let freqs: Vec<u32> = FREQUENCIES.iter().map(|&(n, _)| n).collect();
    let compound = CompoundSection {
        result: compound::calculate(10_000.0, 0.08, 12, 10.0)?,
        continuous_amount: compound::continuous(10_000.0, 0.08, 10.0),
        doubling_time: compound::doubling_time(0.08, 12),
        rate_sweep: compound::rate_sweep(10_000.0, 12, 20.0, &SWEEP_RATES)?,
        frequency_sweep: compound::frequency_sweep(10_000.0, 0.10, 20.0, &freqs)?,
        continuous_comparison: compound::continuous(10_000.0, 0.10, 20.0),
    };

    let budget = 20_000.0;
    let loan = LoanSection {
        result: loan::schedule(500_000.0, 0.24, 36)?,
        budget,
        affordable_principal: loan::affordable_principal(budget, 0.24, 36),
        rate_comparison: loan::rate_comparison(500_000.0, 36, &LOAN_RATES)?,
    };

    let annuity_rate = 0.08 / 12.0;
    let cashflows = vec![-100_000.0, 25_000.0, 30_000.0, 35_000.0, 40_000.0, 20_000.0];
    let time_value = TimeValueSection {
        amount: 100_000.0,
        analysis: time_value::analyze(100_000.0, 0.10, 15.0),
        annuity_payment: 5_000.0,
        fv_annuity: time_value::fv_annuity(5_000.0, annuity_rate, 120),
        pv_annuity: time_value::pv_annuity(5_000.0, annuity_rate, 120),
        irr: time_value::irr_bisect(&cashflows),
        cashflows,
    };

    let percentage = PercentageSection {
        share: percentage::of(2500.0, 10_000.0)?,
        value: percentage::value(15.0, 8000.0),
        total: percentage::find_total(750.0, 30.0)?,
        change_up: percentage::change(80.0, 120.0)?,
        change_down: percentage::change(120.0, 80.0)?,
        margin: percentage::margin(1000.0, 600.0)?,
        markup: percentage::markup(600.0, 1000.0)?,
    };

    Ok(Report { compound, loan, time_value, percentage })
}

/// Currency with thousands separators, e.g. ₺1,234.56
fn fmt(x: f64) -> String {
    let s = format!("{:.2}", x.abs());
    let (int_part, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if x < 0.0 && s.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    format!("{}₺{}.{}", sign, grouped, frac)
}

fn print_header(title: &str) {
    let bar = "═".repeat(60);
    println!("\n{}", bar);
    println!("  {}", title);
    println!("{}", bar);
}

fn print_compound(section: &CompoundSection) {
    print_header("COMPOUND INTEREST");

    let r = &section.result;
    println!("  Principal:          {}", fmt(r.principal));
    println!("  Rate:               {:.1}% annual, compounded {}×/yr", r.rate * 100.0, r.n);
    println!("  Horizon:            {} years", r.years);
    println!("  ─────────────────────────────────");
    println!("  Accumulated:        {}", fmt(r.amount));
    println!("  Interest earned:    {}", fmt(r.interest_earned));
    println!("  Effective rate:     {:.4}%", r.effective_annual_rate * 100.0);
    println!("  Continuous equiv:   {}", fmt(section.continuous_amount));
    println!("  Doubling time:      {:.2} years", section.doubling_time);

    println!("\n  Rate comparison (₺10,000, 12×/yr, 20 years):");
    for res in &section.rate_sweep {
        println!("    {:5.1}%  →  {}", res.rate * 100.0, fmt(res.amount));
    }

    println!("\n  Frequency comparison (₺10,000, 10%, 20 years):");
    for (res, &(_, label)) in section.frequency_sweep.iter().zip(&FREQUENCIES) {
        println!("    {:<12} (n={:<3})  →  {}", label, res.n, fmt(res.amount));
    }
    println!("    {:<12}          →  {}", "Continuous", fmt(section.continuous_comparison));
}

fn print_loan(section: &LoanSection, rows: usize) {
    print_header("LOAN AMORTIZATION");

    let r = &section.result;
    println!("  Loan:               {}", fmt(r.principal));
    println!("  Rate:               {:.1}% annual", r.annual_rate * 100.0);
    println!("  Term:               {} months", r.months);
    println!("  ─────────────────────────────────");
    println!("  Monthly payment:    {}", fmt(r.monthly_payment));
    println!("  Total paid:         {}", fmt(r.total_paid));
    println!("  Total interest:     {}", fmt(r.total_interest));
    println!("  Interest ratio:     {:.1}%", r.interest_ratio * 100.0);

    println!("\n  First {} months:", rows.min(r.schedule.len()));
    println!("    {:>4}  {:>12}  {:>12}  {:>12}  {:>14}", "Mo", "Payment", "Principal", "Interest", "Balance");
    for row in r.schedule.iter().take(rows) {
        println!(
            "    {:4}  {:>12}  {:>12}  {:>12}  {:>14}",
            row.month,
            fmt(row.payment),
            fmt(row.principal_part),
            fmt(row.interest_part),
            fmt(row.remaining_balance),
        );
    }
    if r.schedule.len() > rows {
        println!("    ... ({} more months)", r.schedule.len() - rows);
    }

    println!(
        "\n  Affordable principal at {}/mo budget: {}",
        fmt(section.budget),
        fmt(section.affordable_principal)
    );

    println!("\n  Rate comparison (₺500K, 36 months):");
    for res in &section.rate_comparison {
        println!(
            "    {:5.1}%  →  {}/mo  total interest: {}",
            res.annual_rate * 100.0,
            fmt(res.monthly_payment),
            fmt(res.total_interest)
        );
    }
}

fn print_time_value(section: &TimeValueSection) {
    print_header("TIME VALUE OF MONEY");

    let tv = &section.analysis;
    println!("  Amount:             {}", fmt(section.amount));
    println!("  Rate:               {:.1}%", tv.rate * 100.0);
    println!("  Horizon:            {} years", tv.years);
    println!("  ─────────────────────────────────");
    println!("  Future value:       {}", fmt(tv.future_value));
    println!("  Present value:      {}", fmt(tv.present_value));
    println!("  Growth factor:      {:.4}×", tv.growth_factor);
    println!("  Discount factor:    {:.6}", tv.discount_factor);

    println!("\n  Annuity ({}/mo, 8%, 10yr):", fmt(section.annuity_payment));
    println!("    FV of annuity:    {}", fmt(section.fv_annuity));
    println!("    PV of annuity:    {}", fmt(section.pv_annuity));

    println!("\n  IRR for cashflows {:?}:", section.cashflows);
    match section.irr {
        Some(irr) => println!("    IRR:              {:.2}%", irr * 100.0),
        None => println!("    IRR:  not found"),
    }
}

fn print_percentage(section: &PercentageSection) {
    print_header("PERCENTAGE CALCULATIONS");

    println!("  2,500 of 10,000:    {:.2}%", section.share.percentage);
    println!("  15% of 8,000:       {:.2}", section.value);
    println!("  What is 100% if 750 is 30%?  {:.2}", section.total);
    println!("  Change 80 → 120:   {:+.2}%", section.change_up);
    println!("  Change 120 → 80:   {:+.2}%", section.change_down);
    println!("  Margin (rev=1000, cost=600):   {:.1}%", section.margin);
    println!("  Markup (cost=600, sell=1000):   {:.1}%", section.markup);
}

fn export_series(dir: &Path, report: &Report) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut written = Vec::new();

    let path = dir.join("compound_growth.csv");
    let series = compound::time_series(10_000.0, 0.08, 12, 20)?;
    let mut wtr = csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["Year", "Amount", "Interest"])?;
    for (year, amount, interest) in series.points() {
        wtr.write_record(&[year.to_string(), format!("{:.8}", amount), format!("{:.8}", interest)])?;
    }
    wtr.flush()?;
    written.push(path);

    let path = dir.join("rate_sweep.csv");
    let mut wtr = csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["Rate", "Year", "Amount"])?;
    for &rate in &SWEEP_RATES {
        let series = compound::time_series(10_000.0, rate, 12, 20)?;
        for (year, amount, _) in series.points() {
            wtr.write_record(&[rate.to_string(), year.to_string(), format!("{:.8}", amount)])?;
        }
    }
    wtr.flush()?;
    written.push(path);

    let path = dir.join("loan_schedule.csv");
    let mut wtr = csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    for row in &report.loan.result.schedule {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    written.push(path);

    let path = dir.join("time_value.csv");
    let tv = &report.time_value.analysis;
    let curve = time_value::time_curve(report.time_value.amount, tv.rate, 15);
    let mut wtr = csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["Year", "FutureValue", "PresentValue"])?;
    for ((year, fv), pv) in curve.years.iter().zip(&curve.future_values).zip(&curve.present_values) {
        wtr.write_record(&[year.to_string(), format!("{:.8}", fv), format!("{:.8}", pv)])?;
    }
    wtr.flush()?;
    written.push(path);

    let path = dir.join("percentage.csv");
    let share = &report.percentage.share;
    let mut wtr = csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["Slice", "Value", "Percentage"])?;
    wtr.write_record(&["Part".to_string(), format!("{:.8}", share.part), format!("{:.8}", share.percentage)])?;
    wtr.write_record(&[
        "Remaining".to_string(),
        format!("{:.8}", share.remaining),
        format!("{:.8}", 100.0 - share.percentage),
    ])?;
    wtr.flush()?;
    written.push(path);

    Ok(written)
}

fn run_validation() -> Result<bool> {
    print_header("VALIDATION SUITE");

    let report = validation::run_checks()?;
    for check in &report.checks {
        let mark = if check.passed { "✓" } else { "✗" };
        let dots = ".".repeat(40usize.saturating_sub(check.name.chars().count()));
        println!(
            "  {}  {} {} {:.6}  (exp: {:.6})",
            mark, check.name, dots, check.got, check.expected
        );
    }

    println!("\n  Result: {}/{} checks passed.", report.passed_count(), report.checks.len());
    Ok(report.all_passed())
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.validate {
        let ok = run_validation()?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let report = build_report()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_compound(&report.compound);
        print_loan(&report.loan, cli.rows);
        print_time_value(&report.time_value);
        print_percentage(&report.percentage);
    }

    if !cli.no_export {
        let written = export_series(&cli.output_dir, &report)?;
        info!("exported {} series files to {}", written.len(), cli.output_dir.display());
        if !cli.json {
            print_header("EXPORTING SERIES");
            for path in &written {
                println!("  → {}", path.display());
            }
            println!("\n  Use --no-export to skip.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
