// crates/iec61850-mapper/src/resolver/reports.rs

//! Resolves `<ReportControl>` blocks of `LLN0` into enumerated report instances.

use super::DeviceContext;
use crate::model::ied::{Ln0, ReportControl};
use crate::types::{ReportInstance, Resolution};
use alloc::format;
use alloc::vec::Vec;
use log::warn;

/// Instance count when `RptEnabled` or its `max` is absent (schema default).
const DEFAULT_MAX_INSTANCES: u32 = 1;

/// Instance numbers are rendered with two digits.
const MAX_REPORT_INSTANCES: u32 = 99;

/// Enumerates every report control block of `LLN0`, in declaration order,
/// then by ascending instance number.
pub(crate) fn resolve_reports(device: &DeviceContext<'_>, ln0: Option<&Ln0>) -> Vec<ReportInstance> {
    let Some(ln0) = ln0 else {
        return Vec::new();
    };

    let prefix = device.prefix();
    let mut instances = Vec::new();

    for report in &ln0.report_control {
        let dataset = dataset_reference(&prefix, ln0, report.dat_set.as_deref());

        for instance in 1..=instance_count(report) {
            instances.push(ReportInstance {
                path: format!("{}/LLN0.RP.{}{:02}", prefix, report.name, instance),
                dataset: dataset.clone(),
            });
        }
    }

    instances
}

/// Matches `ReportControl@datSet` against the `DataSet`s declared next to it.
fn dataset_reference(prefix: &str, ln0: &Ln0, name: Option<&str>) -> Resolution {
    name.and_then(|name| ln0.data_set.iter().find(|ds| ds.name == name))
        .map(|ds| format!("{}/LLN0${}", prefix, ds.name))
        .into()
}

/// Reads `RptEnabled@max`. A value that is not an unsigned integer yields no
/// instances; values above [`MAX_REPORT_INSTANCES`] are capped.
fn instance_count(report: &ReportControl) -> u32 {
    let Some(max) = report.rpt_enabled.as_ref().and_then(|r| r.max.as_deref()) else {
        return DEFAULT_MAX_INSTANCES;
    };

    match max.trim().parse::<u32>() {
        Ok(count) if count > MAX_REPORT_INSTANCES => {
            warn!(
                "ReportControl '{}' enables {} instances; only the first {} are enumerated",
                report.name, count, MAX_REPORT_INSTANCES
            );
            MAX_REPORT_INSTANCES
        }
        Ok(count) => count,
        Err(_) => {
            warn!(
                "ReportControl '{}' has an invalid RptEnabled max '{}'; no instances enumerated",
                report.name, max
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::load_scl_from_str;
    use alloc::string::{String, ToString};

    const DEVICE: DeviceContext<'static> = DeviceContext {
        ied_name: "IED1",
        ld_inst: "LD0",
    };

    fn reports_for(ln0_body: &str) -> Vec<String> {
        let xml = format!(
            r#"<SCL><IED name="IED1"><AccessPoint name="AP1"><Server><LDevice inst="LD0">
<LN0 lnClass="LLN0" inst="" lnType="LLN0_T">{}</LN0>
</LDevice></Server></AccessPoint></IED></SCL>"#,
            ln0_body
        );
        let scl = load_scl_from_str(&xml).unwrap();
        let ln0 = scl.ied[0].first_logical_device().and_then(|ld| ld.ln0.as_ref());
        resolve_reports(&DEVICE, ln0)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_instances_are_zero_padded_and_ascending() {
        let lines = reports_for(
            r#"<DataSet name="Measurements"><FCDA ldInst="LD0" lnClass="MMXU" fc="MX"/></DataSet>
<ReportControl name="urcbMeas" datSet="Measurements" rptID="meas" confRev="1">
  <TrgOps dchg="true"/>
  <RptEnabled max="3"/>
</ReportControl>"#,
        );
        assert_eq!(
            lines,
            [
                "IED1LD0/LLN0.RP.urcbMeas01 IED1LD0/LLN0$Measurements",
                "IED1LD0/LLN0.RP.urcbMeas02 IED1LD0/LLN0$Measurements",
                "IED1LD0/LLN0.RP.urcbMeas03 IED1LD0/LLN0$Measurements",
            ]
        );
    }

    #[test]
    fn test_declaration_order_then_instance_order() {
        let lines = reports_for(
            r#"<DataSet name="A"/><DataSet name="B"/>
<ReportControl name="second" datSet="B"><RptEnabled max="2"/></ReportControl>
<ReportControl name="first" datSet="A"><RptEnabled max="1"/></ReportControl>"#,
        );
        assert_eq!(
            lines,
            [
                "IED1LD0/LLN0.RP.second01 IED1LD0/LLN0$B",
                "IED1LD0/LLN0.RP.second02 IED1LD0/LLN0$B",
                "IED1LD0/LLN0.RP.first01 IED1LD0/LLN0$A",
            ]
        );
    }

    #[test]
    fn test_unknown_dataset_is_sentinel() {
        let lines = reports_for(
            r#"<DataSet name="A"/>
<ReportControl name="rpt" datSet="Missing"><RptEnabled max="1"/></ReportControl>
<ReportControl name="noref"><RptEnabled max="1"/></ReportControl>"#,
        );
        assert_eq!(lines, ["IED1LD0/LLN0.RP.rpt01 X", "IED1LD0/LLN0.RP.noref01 X"]);
    }

    #[test]
    fn test_buffered_reports_keep_rp_segment() {
        let lines = reports_for(
            r#"<DataSet name="Events"/>
<ReportControl name="brcb" datSet="Events" buffered="true"><RptEnabled max="2"/></ReportControl>"#,
        );
        assert_eq!(
            lines,
            [
                "IED1LD0/LLN0.RP.brcb01 IED1LD0/LLN0$Events",
                "IED1LD0/LLN0.RP.brcb02 IED1LD0/LLN0$Events",
            ]
        );
    }

    #[test]
    fn test_oversized_max_is_capped() {
        let lines = reports_for(
            r#"<ReportControl name="huge"><RptEnabled max="4000000000"/></ReportControl>"#,
        );
        assert_eq!(lines.len(), 99);
        assert_eq!(lines[0], "IED1LD0/LLN0.RP.huge01 X");
        assert_eq!(lines[98], "IED1LD0/LLN0.RP.huge99 X");
    }

    #[test]
    fn test_instance_count_defaults_and_invalid_values() {
        let lines = reports_for(
            r#"<ReportControl name="implicit"/>
<ReportControl name="nomax"><RptEnabled/></ReportControl>
<ReportControl name="bad"><RptEnabled max="many"/></ReportControl>
<ReportControl name="zero"><RptEnabled max="0"/></ReportControl>"#,
        );
        assert_eq!(
            lines,
            ["IED1LD0/LLN0.RP.implicit01 X", "IED1LD0/LLN0.RP.nomax01 X"]
        );
    }

    #[test]
    fn test_missing_ln0_yields_nothing() {
        assert!(resolve_reports(&DEVICE, None).is_empty());
    }
}
