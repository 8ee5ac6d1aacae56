//! Plain-text rendering of calculation results.

use salary_core::calculations::{
    BigMacCount, CityLookup, CountryComparison, CountryComparisonPair, RelocationResult,
    SalaryComparisonResult, SalaryLookup,
};

const RULE: &str = "═══════════════════════════════════════════════════════";

/// Format a whole amount with thousands separators (e.g., 1,234,567)
pub fn group_thousands(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        out.insert(0, '-');
    }
    out
}

fn usd(amount: f64) -> String {
    format!("${}", group_thousands(amount))
}

fn signed_pct(pct: i64) -> String {
    if pct > 0 {
        format!("+{}%", pct)
    } else {
        format!("{}%", pct)
    }
}

fn header(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
}

pub fn print_salary_result(result: &SalaryComparisonResult, picks: &[&CountryComparison]) {
    header(&format!(
        "{} - {} {}",
        result.occupation.title, result.country.flag, result.country.name
    ));
    println!();
    println!(
        "  Your salary:  {}{} ({})",
        result.country.currency_symbol,
        group_thousands(result.salary_local),
        usd(result.salary_usd)
    );
    println!("  Percentile:   {} (across tracked countries)", result.percentile);
    println!(
        "  Big Macs:     {} per year",
        BigMacCount::from_count(result.big_mac_count).display()
    );
    println!();
    println!(
        "  {:<24} {:>12} {:>12} {:>9} {:>6}  {}",
        "Country", "Salary", "PPP", "Big Macs", "Pctl", "vs you"
    );
    for c in &result.comparisons {
        let marker = if c.country.code == result.country.code { "*" } else { " " };
        println!(
            "{} {:<24} {:>12} {:>12} {:>9} {:>6}  {}",
            marker,
            c.country.name,
            usd(c.estimated_salary),
            usd(c.ppp_adjusted),
            BigMacCount::from_count(c.big_mac_count).display(),
            c.percentile,
            c.relative_to_user.as_str()
        );
    }
    println!();
    if !picks.is_empty() {
        println!("  Highlights:");
        for c in picks {
            println!(
                "    {} {} earns {} ({})",
                c.country.flag,
                c.country.name,
                usd(c.estimated_salary),
                c.relative_to_user.as_str()
            );
        }
        println!();
    }
    println!("{}", RULE);
}

pub fn print_relocation(result: &RelocationResult) {
    header(&format!(
        "{}: {} → {}",
        result.occupation.title, result.from_city.name, result.to_city.name
    ));
    println!();
    println!(
        "  {:<22} {:>14} {:>14} {:>8}",
        "", result.from_city.name, result.to_city.name, "Change"
    );
    println!(
        "  {:<22} {:>14} {:>14} {:>8}",
        "Salary",
        usd(result.from_salary.estimated_salary),
        usd(result.to_salary.estimated_salary),
        signed_pct(result.nominal_change)
    );
    println!(
        "  {:<22} {:>14} {:>14} {:>8}",
        "Cost-of-living adj.",
        usd(result.from_salary.col_adjusted),
        usd(result.to_salary.col_adjusted),
        signed_pct(result.col_adjusted_change)
    );
    println!(
        "  {:<22} {:>14} {:>14} {:>8}",
        "Big Macs per year",
        BigMacCount::from_count(result.big_mac_from).display(),
        BigMacCount::from_count(result.big_mac_to).display(),
        signed_pct(result.big_mac_change)
    );
    println!(
        "  {:<22} {:>14} {:>14}",
        "City percentile", result.percentile_from, result.percentile_to
    );
    println!();
    println!("{}", RULE);
    println!("  VERDICT: {}", result.verdict.as_str().to_uppercase());
    println!("  {}", result.verdict_reason);
    println!("{}", RULE);
}

pub fn print_lookup(lookup: &SalaryLookup) {
    header(&format!(
        "{} in {} {}",
        lookup.occupation.title, lookup.country.flag, lookup.country.name
    ));
    println!();
    println!(
        "  Estimated salary:  {} ({}{})",
        usd(lookup.estimated_salary_usd),
        lookup.country.currency_symbol,
        group_thousands(lookup.estimated_salary_local)
    );
    println!("  PPP-adjusted:      {}", usd(lookup.ppp_adjusted));
    println!(
        "  Big Macs:          {} per year",
        BigMacCount::from_count(lookup.big_mac_count).display()
    );
    println!("  Global percentile: {}", lookup.percentile);
    println!("  vs US reference:   {:.0}%", lookup.ratio_to_us_base * 100.0);
    if let Some(ratio) = lookup.ratio_to_average_wage {
        println!("  vs average wage:   {:.1}x", ratio);
    }
    println!("{}", RULE);
}

pub fn print_city_lookup(lookup: &CityLookup) {
    header(&format!(
        "{} in {}, {}",
        lookup.occupation.title, lookup.city.name, lookup.country.name
    ));
    println!();
    println!(
        "  Estimated salary:  {} ({}{})",
        usd(lookup.estimated_salary_usd),
        lookup.country.currency_symbol,
        group_thousands(lookup.estimated_salary_local)
    );
    println!("  COL-adjusted:      {}", usd(lookup.col_adjusted));
    println!("  PPP-adjusted:      {}", usd(lookup.ppp_adjusted));
    println!(
        "  Big Macs:          {} per year",
        BigMacCount::from_count(lookup.big_mac_count).display()
    );
    println!("  City percentile:   {}", lookup.city_percentile);
    if let Some(national) = lookup.national_salary_usd {
        println!("  National estimate: {}", usd(national));
    }
    println!("{}", RULE);
}

pub fn print_versus(pair: &CountryComparisonPair) {
    let (a, b) = (&pair.first, &pair.second);
    header(&format!(
        "{}: {} vs {}",
        a.occupation.title, a.country.name, b.country.name
    ));
    println!();
    println!("  {:<18} {:>14} {:>14} {:>8}", "", a.country.code, b.country.code, "Diff");
    println!(
        "  {:<18} {:>14} {:>14} {:>8}",
        "Salary",
        usd(a.estimated_salary_usd),
        usd(b.estimated_salary_usd),
        signed_pct(pair.nominal_difference)
    );
    println!(
        "  {:<18} {:>14} {:>14} {:>8}",
        "PPP-adjusted",
        usd(a.ppp_adjusted),
        usd(b.ppp_adjusted),
        signed_pct(pair.ppp_difference)
    );
    println!(
        "  {:<18} {:>14} {:>14}",
        "Big Macs",
        BigMacCount::from_count(a.big_mac_count).display(),
        BigMacCount::from_count(b.big_mac_count).display()
    );
    println!();
    match &pair.higher_paying {
        Some(code) => println!("  Higher paying: {}", code),
        None => println!("  Both countries pay the same"),
    }
    println!("{}", RULE);
}

pub fn print_top(occupation_title: &str, top: &[SalaryLookup]) {
    header(&format!("Top paying countries: {}", occupation_title));
    for (rank, lookup) in top.iter().enumerate() {
        println!(
            "  {:>2}. {} {:<24} {:>12}  (PPP {})",
            rank + 1,
            lookup.country.flag,
            lookup.country.name,
            usd(lookup.estimated_salary_usd),
            usd(lookup.ppp_adjusted)
        );
    }
    println!("{}", RULE);
}
