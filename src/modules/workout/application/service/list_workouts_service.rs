use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::pagination::{parse_page, PageWindow};
use crate::modules::workout::application::ports::incoming::use_cases::{
    ListWorkoutsError, ListWorkoutsUseCase, WorkoutPage,
};
use crate::modules::workout::application::ports::outgoing::{WorkoutListFilter, WorkoutQuery};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListWorkoutsService<Q>
where
    Q: WorkoutQuery,
{
    query: Q,
    page_size: u64,
}

impl<Q> ListWorkoutsService<Q>
where
    Q: WorkoutQuery,
{
    pub fn new(query: Q, page_size: u64) -> Self {
        Self {
            query,
            page_size: page_size.max(1),
        }
    }
}

#[async_trait]
impl<Q> ListWorkoutsUseCase for ListWorkoutsService<Q>
where
    Q: WorkoutQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        keyword: Option<String>,
        page: Option<String>,
    ) -> Result<WorkoutPage, ListWorkoutsError> {
        let filter = WorkoutListFilter::keyword(keyword.as_deref());

        let total = self.query.count_owned(owner, &filter).await?;
        let window = PageWindow::clamp(parse_page(page.as_deref()), self.page_size, total);

        let items = self
            .query
            .list_owned(owner, &filter, window.offset(), window.per_page)
            .await?;

        Ok(WorkoutPage {
            items,
            keyword: filter.keyword,
            window,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::workout::application::domain::entities::Workout;
    use crate::tests::support::in_memory_workouts::{sample_workout, InMemoryWorkouts};
    use uuid::Uuid;

    fn names(page: &WorkoutPage) -> Vec<&str> {
        page.items.iter().map(|w| w.name.as_str()).collect()
    }

    /// Five workouts, "w1" newest.
    fn five_workouts(owner: UserId) -> InMemoryWorkouts {
        let store = InMemoryWorkouts::default();
        for i in 1..=5 {
            store.insert_workout(sample_workout(owner, &format!("w{i}"), i * 10));
        }
        store
    }

    #[tokio::test]
    async fn pages_follow_newest_first_order() {
        let owner = UserId::from(Uuid::new_v4());
        let service = ListWorkoutsService::new(five_workouts(owner), 2);

        let second = service
            .execute(owner, None, Some("2".to_string()))
            .await
            .unwrap();

        assert_eq!(names(&second), vec!["w3", "w4"]);
        assert_eq!(second.window.page, 2);
        assert_eq!(second.window.total, 5);
        assert_eq!(second.window.num_pages, 3);
    }

    #[tokio::test]
    async fn page_beyond_last_returns_last_page() {
        let owner = UserId::from(Uuid::new_v4());
        let service = ListWorkoutsService::new(five_workouts(owner), 2);

        let page = service
            .execute(owner, None, Some("40".to_string()))
            .await
            .unwrap();

        assert_eq!(page.window.page, 3);
        assert_eq!(names(&page), vec!["w5"]);
    }

    #[tokio::test]
    async fn non_numeric_page_is_first_page() {
        let owner = UserId::from(Uuid::new_v4());
        let service = ListWorkoutsService::new(five_workouts(owner), 2);

        let page = service
            .execute(owner, None, Some("last".to_string()))
            .await
            .unwrap();

        assert_eq!(names(&page), vec!["w1", "w2"]);
    }

    #[tokio::test]
    async fn other_owners_workouts_never_appear() {
        let alice = UserId::from(Uuid::new_v4());
        let bob = UserId::from(Uuid::new_v4());
        let store = five_workouts(alice);
        store.insert_workout(sample_workout(bob, "bob's", 1));
        let service = ListWorkoutsService::new(store, 50);

        let page = service.execute(alice, None, None).await.unwrap();

        assert_eq!(page.items.len(), 5);
        assert!(page.items.iter().all(|w| w.owner == alice));

        let bobs = service.execute(bob, None, None).await.unwrap();
        assert_eq!(names(&bobs), vec!["bob's"]);
    }

    #[tokio::test]
    async fn keyword_matches_name_or_comment_case_insensitively() {
        let owner = UserId::from(Uuid::new_v4());
        let store = InMemoryWorkouts::default();
        store.insert_workout(sample_workout(owner, "Leg Day", 1));
        store.insert_workout(Workout {
            comment: Some("felt the LEGS burn".to_string()),
            ..sample_workout(owner, "Tuesday", 2)
        });
        store.insert_workout(sample_workout(owner, "Push", 3));
        let service = ListWorkoutsService::new(store, 10);

        let page = service
            .execute(owner, Some("leg".to_string()), None)
            .await
            .unwrap();

        assert_eq!(names(&page), vec!["Leg Day", "Tuesday"]);
        assert_eq!(page.keyword.as_deref(), Some("leg"));
    }

    #[tokio::test]
    async fn leading_space_in_keyword_is_matched_literally() {
        let owner = UserId::from(Uuid::new_v4());
        let store = InMemoryWorkouts::default();
        store.insert_workout(sample_workout(owner, "Leg day", 2));
        store.insert_workout(sample_workout(owner, "Sunday", 1));
        let service = ListWorkoutsService::new(store, 10);

        let page = service
            .execute(owner, Some(" day".to_string()), None)
            .await
            .unwrap();

        assert_eq!(names(&page), vec!["Leg day"]);
        assert_eq!(page.keyword.as_deref(), Some(" day"));
    }

    #[tokio::test]
    async fn empty_keyword_returns_everything() {
        let owner = UserId::from(Uuid::new_v4());
        let service = ListWorkoutsService::new(five_workouts(owner), 10);

        let page = service
            .execute(owner, Some(String::new()), None)
            .await
            .unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.keyword, None);
    }

    #[tokio::test]
    async fn no_workouts_is_empty_first_page() {
        let service = ListWorkoutsService::new(InMemoryWorkouts::default(), 2);

        let page = service
            .execute(UserId::from(Uuid::new_v4()), None, Some("3".to_string()))
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.window.page, 1);
    }
}
