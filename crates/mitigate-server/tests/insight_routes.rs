mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{
    CITIZEN_ANN, CITIZEN_BOB, HOSPITAL_MERCY, TestApp, covid_case_form, test_app, test_form,
    vaccination_form,
};

async fn seeded() -> TestApp {
    let app = test_app().await;
    app.post_form("/citizen/add", CITIZEN_ANN).await;
    app.post_form("/citizen/add", CITIZEN_BOB).await;
    app.post_form("/vaccination/add", &vaccination_form("1", "Pfizer", 1))
        .await;
    app.post_form("/testing_center/add", &test_form("1", "Negative"))
        .await;
    app.post_form(
        "/awareness_program/add",
        "name=P1&date=2021-05-01&location=Hall&description=Outreach\
         &conducted_by=Health+Dept&participants=1%2C2",
    )
    .await;
    app
}

#[tokio::test]
async fn vaccinated_tested_awareness_lists_matching_participant() {
    let app = seeded().await;

    let reply = app.get("/insight/vaccinated_tested_awareness").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.json(),
        json!({
            "title": "Vaccinated, Tested Negative, and Attended Awareness Program",
            "columns": ["First Name", "Last Name", "Program Name", "Test Result", "Vaccination Status"],
            "rows": [["Ann", "Lee", "P1", "Negative", "Vaccinated"]],
            "filter": {"name": "state", "options": ["CA", "NY"], "selected": null}
        })
    );
}

#[tokio::test]
async fn state_filter_narrows_rows_but_keeps_options() {
    let app = seeded().await;

    let reply = app
        .get("/insight/vaccinated_tested_awareness?state=CA")
        .await
        .json();
    assert_eq!(reply["rows"], json!([]));
    assert_eq!(reply["filter"]["options"], json!(["CA", "NY"]));
    assert_eq!(reply["filter"]["selected"], "CA");

    let empty = app
        .get("/insight/vaccinated_tested_awareness?state=")
        .await
        .json();
    assert_eq!(empty["rows"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn hospital_query_without_hospitals_is_a_conflict() {
    let app = seeded().await;
    app.post_form("/covid_case/add", &covid_case_form("1", "Yes"))
        .await;
    app.post_form("/testing_center/add", &test_form("1", "Positive"))
        .await;

    let reply = app.get("/insight/hospital_positive_cases").await;
    assert_eq!(reply.status, StatusCode::CONFLICT);

    app.post_form("/hospital/add", HOSPITAL_MERCY).await;
    let table = app.get("/insight/hospital_positive_cases").await.json();
    assert_eq!(table["rows"], json!([["Ann", "Lee", "Mercy", 7]]));
}

#[tokio::test]
async fn positive_hospitalized_vaccine_filters_by_vaccine() {
    let app = seeded().await;
    app.post_form("/vaccination/add", &vaccination_form("1", "Moderna", 2))
        .await;
    app.post_form("/covid_case/add", &covid_case_form("1", "Yes"))
        .await;

    let all = app.get("/insight/positive_hospitalized_vaccine").await.json();
    assert_eq!(all["rows"].as_array().unwrap().len(), 2);
    assert_eq!(all["filter"]["name"], "vaccine");
    assert_eq!(all["filter"]["options"], json!(["Moderna", "Pfizer"]));

    let moderna = app
        .get("/insight/positive_hospitalized_vaccine?vaccine=Moderna")
        .await
        .json();
    assert_eq!(moderna["rows"], json!([["Ann", "Lee", "Moderna", 2, "Yes"]]));
}

#[tokio::test]
async fn vaccinated_then_positive_reports_test_details() {
    let app = seeded().await;
    app.post_form("/testing_center/add", &test_form("1", "Positive"))
        .await;
    app.post_form("/testing_center/add", &test_form("2", "Positive"))
        .await;

    let table = app.get("/insight/vaccinated_then_positive").await.json();
    assert_eq!(
        table["rows"],
        json!([["Ann", "Lee", "NY", "2021-04-02", "Positive", "Vaccinated"]])
    );
}

#[tokio::test]
async fn dashboard_returns_three_figures() {
    let app = seeded().await;
    app.post_form("/vaccination/add", &vaccination_form("2", "Pfizer", 2))
        .await;

    let dashboard = app.get("/").await.json();
    assert_eq!(dashboard["vaccine_types"]["data"][0]["labels"], json!(["Pfizer"]));
    assert_eq!(dashboard["vaccine_types"]["data"][0]["values"], json!([2]));
    assert_eq!(dashboard["citizens_by_state"]["data"][0]["x"], json!(["CA", "NY"]));
    assert_eq!(dashboard["dose_distribution"]["data"][0]["x"], json!(["1", "2"]));
    assert_eq!(dashboard["dose_distribution"]["data"][0]["y"], json!([1, 1]));
}
