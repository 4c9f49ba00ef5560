use {
    serde::Serialize,
    rocket::{post, State, serde::json::Json},
    crate::models::{
        quiz::{self, QuizRequest},
        config::TriviaConfig,
        web::{Store, ApiResult},
        db::models::Question
    }
};

#[derive(Serialize, Debug)]
pub struct QuizReply {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>
}

#[post("/quizzes", data = "<request>")]
pub async fn quiz_question(request: Json<QuizRequest>, store: Store, config: &State<TriviaConfig>) -> ApiResult<Json<QuizReply>> {
    let ids = config.category_ids;
    let request = request.into_inner();

    store.run(move |repo| Ok(QuizReply {
        success: true,
        question: quiz::next_question(repo, &request, ids)?
    })).await.map(Json)
}

#[cfg(test)]
mod test {
    use {
        serde_json::{json, Value},
        rocket::{http::{ContentType, Status}, local::blocking::Client},
        crate::test::{client, seed_questions, failing_client, assert_error}
    };

    fn ask(client: &Client, body: Value) -> Value {
        let res = client.post("/quizzes")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        res.into_json().unwrap()
    }

    #[test]
    fn walks_a_category_without_repeats() {
        let (client, store) = client();
        let art = seed_questions(&store)
            .into_iter()
            .filter(|q| q.category == 2)
            .count();

        let mut previous: Vec<i64> = Vec::new();
        loop {
            let body = ask(&client, json!({
                "previous_questions": previous,
                "quiz_category": {"type": "Art", "id": 1}
            }));
            assert_eq!(body["success"], true);

            match body.get("question") {
                Some(q) => {
                    assert_eq!(q["category"], 2);
                    let id = q["id"].as_i64().unwrap();
                    assert!(!previous.contains(&id));
                    previous.push(id);
                }
                None => break
            }
        }

        assert_eq!(previous.len(), art);
    }

    #[test]
    fn no_category_draws_from_everything() {
        let (client, store) = client();
        let seeded = seed_questions(&store);
        let all_but_one = seeded[1..].iter().map(|q| q.id).collect::<Vec<_>>();

        let body = ask(&client, json!({
            "previous_questions": all_but_one,
            "quiz_category": null
        }));
        assert_eq!(body["question"]["id"], seeded[0].id);
    }

    #[test]
    fn exhausted_category_has_no_question() {
        let (client, store) = client();
        let sports = seed_questions(&store)
            .into_iter()
            .filter(|q| q.category == 6)
            .map(|q| q.id)
            .collect::<Vec<_>>();

        let body = ask(&client, json!({
            "previous_questions": sports,
            "quiz_category": {"id": 5}
        }));
        assert_eq!(body["success"], true);
        assert!(body.get("question").is_none());
    }

    #[test]
    fn malformed_body_is_422() {
        let (client, _) = client();
        let res = client.post("/quizzes")
            .header(ContentType::JSON)
            .body(r#"{"previous_questions": "nope"}"#)
            .dispatch();

        assert_eq!(res.status(), Status::UnprocessableEntity);
        assert_eq!(res.into_json::<Value>().unwrap()["success"], false);
    }

    #[test]
    fn store_failure_is_422() {
        let client = failing_client();
        let res = client.post("/quizzes")
            .header(ContentType::JSON)
            .body(json!({"previous_questions": [], "quiz_category": null}).to_string())
            .dispatch();

        assert_error(res, Status::UnprocessableEntity);
    }
}
