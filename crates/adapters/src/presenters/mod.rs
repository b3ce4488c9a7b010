use mintprep_application::{GenerationReport, PlannedRecord};

pub fn present_report(report: &GenerationReport) -> String {
    format!(
        "generation finished: assets_found={}, files_written={}",
        report.assets_found, report.files_written
    )
}

pub fn present_planned_record(planned: &PlannedRecord) -> String {
    format!(
        "{}\t{}\t{}",
        planned.token_id.get(),
        planned.record.name,
        planned.record.image
    )
}
