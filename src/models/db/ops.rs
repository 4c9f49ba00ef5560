use {
    diesel::{
        insert_into,
        delete,
        PgConnection,
        RunQueryDsl,
        prelude::*,
        pg::Pg,
        expression_methods::PgTextExpressionMethods,
        result::QueryResult
    },
    crate::models::{
        filter::QuestionFilter,
        pagination::Pagination,
        db::{
            schema,
            models::{Question, NewQuestion, Category}
        }
    }
};

diesel::define_sql_function!(fn random() -> diesel::sql_types::Double);

impl Category {
    pub fn load_all(conn: &mut PgConnection) -> QueryResult<Vec<Category>> {
        use schema::categories::dsl::*;

        categories
            .order(id.asc())
            .load(conn)
    }

    pub fn find(cat_id: i32, conn: &mut PgConnection) -> QueryResult<Option<Category>> {
        use schema::categories::dsl::*;

        categories
            .find(cat_id)
            .first(conn)
            .optional()
    }
}

fn filtered(filter: &QuestionFilter) -> schema::questions::BoxedQuery<'static, Pg> {
    use schema::questions::dsl::*;

    let mut query = questions.into_boxed();
    if let Some(cat) = filter.category {
        query = query.filter(category.eq(cat));
    }
    if let Some(pattern) = filter.like_pattern() {
        query = query.filter(question.ilike(pattern));
    }
    query
}

impl Question {
    pub fn insert(new: &NewQuestion, conn: &mut PgConnection) -> QueryResult<Question> {
        use schema::questions::dsl::*;

        insert_into(questions)
            .values(new)
            .get_result(conn)
    }

    pub fn delete(question_id: i32, conn: &mut PgConnection) -> QueryResult<bool> {
        use schema::questions::dsl::*;

        delete(questions.find(question_id))
            .execute(conn)
            .map(|deleted| deleted > 0)
    }

    pub fn count_all(conn: &mut PgConnection) -> QueryResult<i64> {
        use schema::questions::dsl::*;

        questions
            .count()
            .get_result(conn)
    }

    pub fn count_matching(filter: &QuestionFilter, conn: &mut PgConnection) -> QueryResult<i64> {
        filtered(filter)
            .count()
            .get_result(conn)
    }

    pub fn load_page(filter: &QuestionFilter, page: Pagination, conn: &mut PgConnection) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        filtered(filter)
            .order(id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .load(conn)
    }

    pub fn random(cat: Option<i32>, exclude: &[i32], conn: &mut PgConnection) -> QueryResult<Option<Question>> {
        use schema::questions::dsl::*;

        filtered(&QuestionFilter::default().in_category(cat))
            .filter(id.ne_all(exclude.to_vec()))
            .order(random())
            .first(conn)
            .optional()
    }
}
