//! Table and JSON rendering for list results. Single resources are always
//! printed as JSON via [`print_json`].

use rewardhub_api::types::{
    Address, Cashback, CashbackProgram, Category, CommissionEntry, LeaderboardEntry, Payment,
    PointsRule, Selection, TransferMethod,
};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

fn format_amount(cents: i64) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}

#[derive(Tabled, Serialize)]
struct AddressRow {
    #[tabled(rename = "Street")]
    #[serde(rename = "Street")]
    street: String,
    #[tabled(rename = "City")]
    #[serde(rename = "City")]
    city: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
    #[tabled(rename = "Zip")]
    #[serde(rename = "Zip")]
    zip_code: String,
    #[tabled(rename = "Selected")]
    #[serde(rename = "Selected")]
    is_selected: bool,
}

#[derive(Tabled, Serialize)]
struct TransferMethodRow {
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    key_type: String,
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key_value: String,
    #[tabled(rename = "Default")]
    #[serde(rename = "Default")]
    is_default: bool,
}

#[derive(Tabled, Serialize)]
struct CommissionRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct PaymentRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Method")]
    #[serde(rename = "Method")]
    method: String,
}

#[derive(Tabled, Serialize)]
struct PointsRuleRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    rule_type: String,
    #[tabled(rename = "Points")]
    #[serde(rename = "Points")]
    points: i64,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    is_active: bool,
}

#[derive(Tabled, Serialize)]
struct CashbackProgramRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Percent")]
    #[serde(rename = "Percent")]
    percent: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    is_active: bool,
    #[tabled(rename = "From")]
    #[serde(rename = "From")]
    valid_from: String,
    #[tabled(rename = "Until")]
    #[serde(rename = "Until")]
    valid_until: String,
}

#[derive(Tabled, Serialize)]
struct CashbackRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Program")]
    #[serde(rename = "Program")]
    program_id: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Tabled, Serialize)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Icon")]
    #[serde(rename = "Icon")]
    icon: String,
}

#[derive(Tabled, Serialize)]
struct LeaderboardRow {
    #[tabled(rename = "Pos")]
    #[serde(rename = "Pos")]
    position: i64,
    #[tabled(rename = "User")]
    #[serde(rename = "User")]
    username: String,
    #[tabled(rename = "Points")]
    #[serde(rename = "Points")]
    points: i64,
}

#[derive(Tabled, Serialize)]
struct SelectionRow {
    #[tabled(rename = "Product")]
    #[serde(rename = "Product")]
    product_id: String,
    #[tabled(rename = "Saved")]
    #[serde(rename = "Saved")]
    saved_at: String,
}

fn build_address_rows(addresses: &[Address]) -> Vec<AddressRow> {
    addresses
        .iter()
        .map(|a| AddressRow {
            street: format!("{}, {}", a.street, a.number),
            city: a.city.clone(),
            state: a.state.clone(),
            zip_code: a.zip_code.clone(),
            is_selected: a.is_selected,
        })
        .collect()
}

fn build_transfer_method_rows(methods: &[TransferMethod]) -> Vec<TransferMethodRow> {
    methods
        .iter()
        .map(|m| TransferMethodRow {
            key_type: m.key_type.to_string(),
            key_value: m.key_value.clone(),
            is_default: m.is_default,
        })
        .collect()
}

fn build_commission_rows(entries: &[CommissionEntry]) -> Vec<CommissionRow> {
    entries
        .iter()
        .map(|e| CommissionRow {
            date: e.created_at.date_naive().to_string(),
            amount: format_amount(e.amount),
            status: e.status.to_string(),
            description: e.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_payment_rows(payments: &[Payment]) -> Vec<PaymentRow> {
    payments
        .iter()
        .map(|p| PaymentRow {
            date: p.created_at.date_naive().to_string(),
            amount: format_amount(p.amount),
            status: p.status.to_string(),
            method: p.method.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_points_rule_rows(rules: &[PointsRule]) -> Vec<PointsRuleRow> {
    rules
        .iter()
        .map(|r| PointsRuleRow {
            name: r.name.clone(),
            rule_type: r.rule_type.to_string(),
            points: r.points,
            is_active: r.is_active,
        })
        .collect()
}

fn build_cashback_program_rows(programs: &[CashbackProgram]) -> Vec<CashbackProgramRow> {
    programs
        .iter()
        .map(|p| CashbackProgramRow {
            name: p.name.clone(),
            percent: format!("{}%", p.percent),
            is_active: p.is_active,
            valid_from: p.valid_from.map(|d| d.to_string()).unwrap_or_default(),
            valid_until: p.valid_until.map(|d| d.to_string()).unwrap_or_default(),
        })
        .collect()
}

fn build_cashback_rows(cashbacks: &[Cashback]) -> Vec<CashbackRow> {
    cashbacks
        .iter()
        .map(|c| CashbackRow {
            date: c.created_at.date_naive().to_string(),
            program_id: c.program_id.clone(),
            amount: format_amount(c.amount),
        })
        .collect()
}

fn build_category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            slug: c.slug.clone(),
            icon: c.icon.to_string(),
        })
        .collect()
}

fn build_leaderboard_rows(entries: &[LeaderboardEntry]) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .map(|e| LeaderboardRow {
            position: e.position,
            username: e.username.clone(),
            points: e.points,
        })
        .collect()
}

fn build_selection_rows(selections: &[Selection]) -> Vec<SelectionRow> {
    selections
        .iter()
        .map(|s| SelectionRow {
            product_id: s.product_id.clone(),
            saved_at: s.created_at.date_naive().to_string(),
        })
        .collect()
}

// -- Table output --

pub fn print_addresses_table(addresses: &[Address]) {
    println!("{}", Table::new(build_address_rows(addresses)));
}

pub fn print_transfer_methods_table(methods: &[TransferMethod]) {
    println!("{}", Table::new(build_transfer_method_rows(methods)));
}

pub fn print_commissions_table(entries: &[CommissionEntry]) {
    println!("{}", Table::new(build_commission_rows(entries)));
}

pub fn print_payments_table(payments: &[Payment]) {
    println!("{}", Table::new(build_payment_rows(payments)));
}

pub fn print_points_rules_table(rules: &[PointsRule]) {
    println!("{}", Table::new(build_points_rule_rows(rules)));
}

pub fn print_cashback_programs_table(programs: &[CashbackProgram]) {
    println!("{}", Table::new(build_cashback_program_rows(programs)));
}

pub fn print_cashbacks_table(cashbacks: &[Cashback]) {
    println!("{}", Table::new(build_cashback_rows(cashbacks)));
}

pub fn print_categories_table(categories: &[Category]) {
    println!("{}", Table::new(build_category_rows(categories)));
}

pub fn print_leaderboard_table(entries: &[LeaderboardEntry]) {
    println!("{}", Table::new(build_leaderboard_rows(entries)));
}

pub fn print_selections_table(selections: &[Selection]) {
    println!("{}", Table::new(build_selection_rows(selections)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
