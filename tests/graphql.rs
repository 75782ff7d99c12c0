use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::Value;

use contacts_backend::api::Identity;
use contacts_backend::db::memory::MemoryModel;
use contacts_backend::db::model::ContactModel;
use contacts_backend::graphql::{self, AppSchema};

fn schema_over(model: &Arc<MemoryModel>) -> AppSchema {
    graphql::build_schema(model.clone())
}

async fn execute(schema: &AppSchema, identity: Identity, query: &str) -> Value {
    let response = schema
        .execute(graphql::request_with_identity(query, identity))
        .await;
    serde_json::to_value(&response).expect("response serializes")
}

fn assert_no_errors(response: &Value) {
    let errors = response.get("errors");
    assert!(
        errors.is_none() || errors.map(|e| e.as_array().is_none_or(|a| a.is_empty())) == Some(true),
        "unexpected errors: {response}"
    );
}

async fn create_template(schema: &AppSchema, identity: Identity, name: &str, has_rate: bool) -> String {
    let mutation = format!(
        r#"mutation {{
            createTagTemplate(createTagTemplateInput: {{name: "{name}", hasRate: {has_rate}}}) {{
                id
            }}
        }}"#
    );
    let response = execute(schema, identity, &mutation).await;
    assert_no_errors(&response);
    response["data"]["createTagTemplate"]["id"]
        .as_str()
        .expect("template id")
        .to_owned()
}

async fn create_tag(
    schema: &AppSchema,
    identity: Identity,
    template_id: &str,
    contact_id: &str,
    rate: f64,
) -> Value {
    let mutation = format!(
        r#"mutation {{
            createTag(createTagInput: {{templateId: "{template_id}", contactId: "{contact_id}", rate: {rate}}}) {{
                id
                name
                templateId
                ownerId
                rate
                contactId
                hasRate
            }}
        }}"#
    );
    execute(schema, identity, &mutation).await
}

#[tokio::test]
async fn unauthenticated_mutations_fail_before_data_access() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    let response = execute(
        &schema,
        Identity::anonymous(),
        r#"mutation { createTagTemplate(createTagTemplateInput: {name: "VIP", hasRate: true}) { id } }"#,
    )
    .await;

    assert_eq!(
        response["errors"][0]["message"],
        "please login to createTagTemplate"
    );
    assert_eq!(response["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");

    // Nothing was written.
    assert!(
        model
            .templates_by_owner_id("user-a")
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn unauthenticated_queries_are_rejected_too() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    let response = execute(
        &schema,
        Identity::anonymous(),
        r#"query { getUserTagTemplates { id } }"#,
    )
    .await;
    assert_eq!(
        response["errors"][0]["message"],
        "please login to getUserTagTemplates"
    );

    let response = execute(
        &schema,
        Identity::anonymous(),
        r#"query { interactionCounts(isSelf: true) { count date } }"#,
    )
    .await;
    assert_eq!(
        response["errors"][0]["message"],
        "please login to interactionCounts"
    );
}

#[tokio::test]
async fn vip_template_and_tag_scenario() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    let response = execute(
        &schema,
        Identity::user("user-a"),
        r#"mutation {
            createTagTemplate(createTagTemplateInput: {name: "VIP", hasRate: true}) {
                id
                name
                ownerId
                hasRate
            }
        }"#,
    )
    .await;
    assert_no_errors(&response);
    let template = &response["data"]["createTagTemplate"];
    assert_eq!(template["name"], "VIP");
    assert_eq!(template["ownerId"], "user-a");
    assert_eq!(template["hasRate"], true);
    let template_id = template["id"].as_str().unwrap().to_owned();

    let response = create_tag(&schema, Identity::user("user-a"), &template_id, "c1", 5.0).await;
    assert_no_errors(&response);
    let tag = &response["data"]["createTag"];
    assert_eq!(tag["name"], "VIP");
    assert_eq!(tag["hasRate"], true);
    assert_eq!(tag["ownerId"], "user-a");
    assert_eq!(tag["rate"], 5.0);
    assert_eq!(tag["contactId"], "c1");
    assert_eq!(tag["templateId"], template_id);
    let tag_id = tag["id"].as_str().unwrap();

    let response = execute(
        &schema,
        Identity::user("user-a"),
        r#"query { getContactTags(contactId: "c1") { id name } }"#,
    )
    .await;
    assert_no_errors(&response);
    let listed = response["data"]["getContactTags"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], tag_id);
}

#[tokio::test]
async fn create_tag_with_unknown_template_is_a_validation_error() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    let response = create_tag(&schema, Identity::user("user-a"), "missing", "c1", 5.0).await;
    assert_eq!(response["errors"][0]["message"], "no template found");
    assert_eq!(
        response["errors"][0]["extensions"]["code"],
        "GRAPHQL_VALIDATION_FAILED"
    );

    assert!(model.tags_by_contact_id("c1").await.unwrap().is_empty());
}

#[tokio::test]
async fn rate_tag_returns_null_for_unknown_ids() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    let response = execute(
        &schema,
        Identity::user("user-a"),
        r#"mutation { rateTag(rateTagInput: {id: "missing", rate: 2}) { id rate } }"#,
    )
    .await;
    assert_no_errors(&response);
    assert!(response["data"]["rateTag"].is_null());
}

#[tokio::test]
async fn rate_tag_updates_and_returns_the_tag() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    let template_id = create_template(&schema, Identity::user("user-a"), "Climber", true).await;
    let response = create_tag(&schema, Identity::user("user-a"), &template_id, "c1", 1.0).await;
    let tag_id = response["data"]["createTag"]["id"].as_str().unwrap().to_owned();

    let mutation = format!(
        r#"mutation {{ rateTag(rateTagInput: {{id: "{tag_id}", rate: 9}}) {{ id rate }} }}"#
    );
    let response = execute(&schema, Identity::user("user-a"), &mutation).await;
    assert_no_errors(&response);
    assert_eq!(response["data"]["rateTag"]["id"], tag_id);
    assert_eq!(response["data"]["rateTag"]["rate"], 9.0);
}

#[tokio::test]
async fn deletes_report_whether_something_was_removed() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    let template_id = create_template(&schema, Identity::user("user-a"), "VIP", false).await;
    let response = create_tag(&schema, Identity::user("user-a"), &template_id, "c1", 0.0).await;
    let tag_id = response["data"]["createTag"]["id"].as_str().unwrap().to_owned();

    let mutation = format!(r#"mutation {{ deleteTag(deleteTagInput: {{id: "{tag_id}"}}) }}"#);
    let response = execute(&schema, Identity::user("user-a"), &mutation).await;
    assert_no_errors(&response);
    assert_eq!(response["data"]["deleteTag"], true);

    let response = execute(&schema, Identity::user("user-a"), &mutation).await;
    assert_eq!(response["data"]["deleteTag"], false);

    let mutation = format!(
        r#"mutation {{ deleteTagTemplate(deleteTagTemplateInput: {{id: "{template_id}"}}) }}"#
    );
    let response = execute(&schema, Identity::user("user-a"), &mutation).await;
    assert_eq!(response["data"]["deleteTagTemplate"], true);

    let response = execute(&schema, Identity::user("user-a"), &mutation).await;
    assert_eq!(response["data"]["deleteTagTemplate"], false);
}

#[tokio::test]
async fn templates_are_listed_per_owner() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    create_template(&schema, Identity::user("user-a"), "VIP", true).await;
    create_template(&schema, Identity::user("user-b"), "Other", false).await;

    let response = execute(
        &schema,
        Identity::user("user-a"),
        r#"query { getUserTagTemplates { name ownerId } }"#,
    )
    .await;
    assert_no_errors(&response);
    let listed = response["data"]["getUserTagTemplates"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "VIP");
    assert_eq!(listed[0]["ownerId"], "user-a");
}

#[tokio::test]
async fn interaction_counts_aggregate_per_day() {
    let model = Arc::new(MemoryModel::new());
    let schema = schema_over(&model);

    let now = Utc::now();
    model.record_interaction("user-a", "c1", now);
    model.record_interaction("user-a", "c1", now);
    model.record_interaction("user-a", "c2", now - Duration::days(2));

    let response = execute(
        &schema,
        Identity::user("user-a"),
        r#"query { interactionCounts(isSelf: false, contactId: "c1") { count date } }"#,
    )
    .await;
    assert_no_errors(&response);
    let counts = response["data"]["interactionCounts"].as_array().unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0]["count"], 2);
    assert_eq!(
        counts[0]["date"],
        now.date_naive().format("%Y-%m-%d").to_string()
    );

    // Self mode spans every contact.
    let response = execute(
        &schema,
        Identity::user("user-a"),
        r#"query { interactionCounts(isSelf: true) { count date } }"#,
    )
    .await;
    assert_no_errors(&response);
    let counts = response["data"]["interactionCounts"].as_array().unwrap();
    assert_eq!(counts.len(), 2);
}
