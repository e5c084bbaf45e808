//! Built-in templates for the documents the product ships with.

use docforge_core::{NewTemplate, Template};

use crate::error::Result;
use crate::registry::TemplateRegistry;

const LABOR_ARBITRATION_BODY: &str = "劳动人事争议仲裁申请书

申请人：{applicant_name}，性别：{applicant_gender}，身份证号码：{applicant_id}
联系电话：{applicant_phone}
住址：{applicant_address}

被申请人：{respondent_name}
法定代表人：{respondent_legal_rep}
住所地：{respondent_address}
联系电话：{respondent_phone}

仲裁请求：
{arbitration_requests}

事实与理由：
{facts_and_reasons}

证据清单：
{evidence_list}

此致
{arbitration_committee}

申请人（签名）：{applicant_name}
{application_date}
";

const WAGE_COMPLAINT_BODY: &str = "欠薪投诉书

投诉人：{complainant_name}，联系电话：{complainant_phone}
被投诉单位：{employer_name}
单位地址：{employer_address}

投诉人于{employment_start}入职被投诉单位，被投诉单位拖欠投诉人{unpaid_period}工资，共计人民币{unpaid_amount}元。

具体情况：
{complaint_details}

请求贵单位依法责令被投诉单位支付拖欠的工资。

此致
{labor_inspection_bureau}

投诉人：{complainant_name}
{complaint_date}
";

const TERMINATION_NOTICE_BODY: &str = "解除劳动合同通知书

{employer_name}：

本人{employee_name}（身份证号码：{employee_id}）于{hire_date}入职贵单位。因贵单位{termination_reason}，根据《中华人民共和国劳动合同法》第三十八条的规定，本人自{termination_date}起解除与贵单位的劳动合同，并保留要求贵单位支付拖欠工资及经济补偿金的权利。

特此通知。

通知人：{employee_name}
{notice_date}
";

/// Definitions of the built-in templates, with their field lists declared.
pub fn builtin_templates() -> Vec<NewTemplate> {
    vec![
        NewTemplate::new("劳动仲裁申请书", LABOR_ARBITRATION_BODY)
            .with_category("labor_arbitration")
            .with_description("Application to a labor dispute arbitration committee.")
            .with_fields([
                "applicant_name",
                "applicant_gender",
                "applicant_id",
                "applicant_phone",
                "applicant_address",
                "respondent_name",
                "respondent_legal_rep",
                "respondent_address",
                "respondent_phone",
                "arbitration_requests",
                "facts_and_reasons",
                "evidence_list",
                "arbitration_committee",
                "application_date",
            ]),
        NewTemplate::new("欠薪投诉书", WAGE_COMPLAINT_BODY)
            .with_category("wage_complaint")
            .with_description("Unpaid-wage complaint to the labor inspection bureau.")
            .with_fields([
                "complainant_name",
                "complainant_phone",
                "employer_name",
                "employer_address",
                "employment_start",
                "unpaid_period",
                "unpaid_amount",
                "complaint_details",
                "labor_inspection_bureau",
                "complaint_date",
            ]),
        NewTemplate::new("解除劳动合同通知书", TERMINATION_NOTICE_BODY)
            .with_category("termination_notice")
            .with_description("Employee notice terminating the contract over unpaid wages.")
            .with_fields([
                "employer_name",
                "employee_name",
                "employee_id",
                "hire_date",
                "termination_reason",
                "termination_date",
                "notice_date",
            ]),
    ]
}

/// Register the built-in templates when the registry is empty.
///
/// Returns the templates registered by this call.
pub async fn seed_catalog(registry: &TemplateRegistry) -> Result<Vec<Template>> {
    if !registry.list().await?.is_empty() {
        tracing::debug!(event = "catalog_seed_skipped");
        return Ok(Vec::new());
    }

    let mut seeded = Vec::new();
    for definition in builtin_templates() {
        seeded.push(registry.register(definition).await?);
    }
    tracing::info!(event = "catalog_seeded", count = seeded.len());
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use docforge_core::check_definition;

    use super::*;

    #[test]
    fn builtin_definitions_are_consistent() {
        for definition in builtin_templates() {
            let fields = check_definition(&definition)
                .unwrap_or_else(|err| panic!("{}: {err}", definition.name));
            assert_eq!(Some(fields), definition.fields, "{}", definition.name);
        }
    }
}
