use actix_web::{web, HttpResponse, Responder};
use photo_types::Vocabulary;

/// Closed vocabularies for the metadata form's selects
async fn get_vocabulary() -> impl Responder {
    HttpResponse::Ok().json(Vocabulary::collect())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/vocabulary").route(web::get().to(get_vocabulary)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_vocabulary_payload() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/api/vocabulary").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["tags"][0], "concert");
        assert_eq!(body["linkTypes"][2], "spotify");
        assert_eq!(body["makes"][0]["value"], "SONY");
    }
}
