//! Topographic plan report

use haulcalc_domain::model::Plan;
use haulcalc_types::{Report, ReportTable};

use super::{count, num};

pub const PLAN_REPORT_ID: &str = "topographic-plan";
pub const PLAN_TABLE: &str = "Плановые величины (топографический метод)";

fn feasibility_label(feasible: bool) -> &'static str {
    if feasible {
        "tо < Tн"
    } else {
        "tо ≥ Tн"
    }
}

pub fn plan_report(plan: &Plan) -> Report {
    let mut table = ReportTable::new(&[
        ("route", "Маршрут"),
        ("plannedTonnage", "Qпл, т"),
        ("plannedTonKm", "Рд, т·км"),
        ("plannedDistance", "Lобщ, км"),
        ("plannedDutyTime", "ΣTн факт, ч"),
        ("vehiclesNeeded", "Апл, ед."),
        ("feasibility", "Проверка to < Tн"),
    ]);
    for row in &plan.rows {
        table.push_row([
            row.route.clone(),
            num(row.planned_tonnage),
            num(row.planned_ton_km),
            num(row.planned_distance),
            num(row.planned_duty_time),
            count(row.vehicles_needed),
            feasibility_label(row.feasible).to_string(),
        ]);
    }
    let totals = &plan.totals;
    table.push_row([
        "Итого".to_string(),
        num(totals.planned_tonnage),
        num(totals.planned_ton_km),
        num(totals.planned_distance),
        num(totals.planned_duty_time),
        count(totals.vehicles_needed),
        String::new(),
    ]);

    let mut report = Report::new(PLAN_REPORT_ID);
    report
        .scalar("Время на погрузку-выгрузку за ездку, ч", num(plan.service_time))
        .table(PLAN_TABLE, table);
    if !plan.skipped_routes.is_empty() {
        report.scalar("Маршруты без данных о пробегах", plan.skipped_routes.join(", "));
    }
    report
}
