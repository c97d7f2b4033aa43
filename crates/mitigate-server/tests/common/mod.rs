#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mitigate_config::MitigateConfig;
use mitigate_db::service::MitigateService;
use mitigate_server::{AppState, SharedState, router};

pub struct TestApp {
    pub router: Router,
    pub state: SharedState,
}

pub struct Reply {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

pub async fn test_app() -> TestApp {
    let service = MitigateService::new_local(":memory:").await.unwrap();
    let state = AppState::new(service, MitigateConfig::default());
    TestApp {
        router: router(state.clone()),
        state,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Reply {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Reply {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Reply {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        Reply {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

pub const CITIZEN_ANN: &str =
    "citizen_id=1&first_name=Ann&last_name=Lee&age=34&gender=F&state=NY&country=USA";
pub const CITIZEN_BOB: &str =
    "citizen_id=2&first_name=Bob&last_name=Ray&age=51&gender=M&state=CA&country=USA";

pub fn vaccination_form(citizen_id: &str, vaccine_type: &str, dose: u32) -> String {
    format!(
        "citizen_id={citizen_id}&vaccine_type={vaccine_type}&dose_number={dose}\
         &date_administered=2021-03-01&administered_by=Dr.+Grey&location=Clinic"
    )
}

pub fn test_form(citizen_id: &str, result: &str) -> String {
    format!(
        "name=Main+St&location=Albany&test_type=PCR&test_date=2021-04-02\
         &citizen_id={citizen_id}&result={result}&administered_by=Nurse+Kim"
    )
}

pub fn covid_case_form(citizen_id: &str, hospitalized: &str) -> String {
    format!(
        "citizen_id={citizen_id}&date_positive=2021-04-02&severity=Severe\
         &hospitalized={hospitalized}&recovery_status=Recovering&date_updated=2021-04-09"
    )
}

pub const HOSPITAL_MERCY: &str =
    "name=Mercy&location=Albany&capacity=120&available_beds=7&contact_info=555-0100";
