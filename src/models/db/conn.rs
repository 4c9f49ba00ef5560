use {
    log::info,
    diesel::{
        PgConnection,
        r2d2::{ConnectionManager, Pool, PooledConnection}
    },
    crate::models::{
        filter::QuestionFilter,
        pagination::Pagination,
        repo::{Repository, StoreResult, Listing},
        db::models::{Question, NewQuestion, Category}
    }
};

type Connection = PgConnection;
type ConnectionPool = Pool<ConnectionManager<Connection>>;

pub struct PgRepository {
    pool: ConnectionPool
}

impl PgRepository {
    pub fn connect(url: &str, max_size: u32) -> StoreResult<PgRepository> {
        let pool = Pool::builder()
            .max_size(max_size)
            .build(ConnectionManager::new(url))?;
        info!("connected to postgres with a pool of {}", max_size);

        Ok(PgRepository { pool })
    }

    fn conn(&self) -> StoreResult<PooledConnection<ConnectionManager<Connection>>> {
        Ok(self.pool.get()?)
    }
}

impl Repository for PgRepository {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        let mut conn = self.conn()?;
        Ok(Category::load_all(&mut conn)?)
    }

    fn category(&self, id: i32) -> StoreResult<Option<Category>> {
        let mut conn = self.conn()?;
        Ok(Category::find(id, &mut conn)?)
    }

    fn count_questions(&self) -> StoreResult<i64> {
        let mut conn = self.conn()?;
        Ok(Question::count_all(&mut conn)?)
    }

    fn questions(&self, filter: &QuestionFilter, page: Pagination) -> StoreResult<Listing> {
        let mut conn = self.conn()?;

        Ok(Listing {
            matching: Question::count_matching(filter, &mut conn)?,
            questions: Question::load_page(filter, page, &mut conn)?
        })
    }

    fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question> {
        let mut conn = self.conn()?;
        Ok(Question::insert(new, &mut conn)?)
    }

    fn delete_question(&self, id: i32) -> StoreResult<bool> {
        let mut conn = self.conn()?;
        Ok(Question::delete(id, &mut conn)?)
    }

    fn random_question(&self, category: Option<i32>, exclude: &[i32]) -> StoreResult<Option<Question>> {
        let mut conn = self.conn()?;
        Ok(Question::random(category, exclude, &mut conn)?)
    }
}
