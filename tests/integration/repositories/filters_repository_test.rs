// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use crawlcfg::domain::criteria::{FiltersCriteria, RangeCondition};
use crawlcfg::domain::models::crawler::Crawler;
use crawlcfg::domain::models::filters::Filters;
use crawlcfg::domain::repositories::crawler_repository::CrawlerRepository;
use crawlcfg::domain::repositories::filters_repository::FiltersRepository;
use crawlcfg::domain::repositories::RepositoryError;
use crawlcfg::infrastructure::repositories::crawler_repo_impl::CrawlerRepositoryImpl;
use crawlcfg::infrastructure::repositories::filters_repo_impl::FiltersRepositoryImpl;

#[tokio::test]
async fn test_dangling_crawler_reference_violates_constraint() {
    let repo = FiltersRepositoryImpl::new(create_test_db().await);

    let err = repo.save(&Filters::new(Some(77))).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)), "{:?}", err);
}

#[tokio::test]
async fn test_crawler_id_criteria_follow_the_reference() {
    let db = create_test_db().await;
    let crawlers = CrawlerRepositoryImpl::new(db.clone());
    let repo = FiltersRepositoryImpl::new(db);

    let crawler = crawlers
        .save(&Crawler::new("AAAAAAAAAA", -1, "AAAAAAAAAA"))
        .await
        .unwrap()
        .id
        .unwrap();
    let owned = repo.save(&Filters::new(Some(crawler))).await.unwrap();
    let detached = repo.save(&Filters::new(None)).await.unwrap();

    let mut equals = FiltersCriteria::new();
    equals.crawler_id().push(RangeCondition::Equals(crawler));
    assert_eq!(repo.find_by_criteria(&equals).await.unwrap(), vec![owned.clone()]);
    assert_eq!(repo.count_by_criteria(&equals).await.unwrap(), 1);

    let mut next = FiltersCriteria::new();
    next.crawler_id().push(RangeCondition::Equals(crawler + 1));
    assert!(repo.find_by_criteria(&next).await.unwrap().is_empty());
    assert_eq!(repo.count_by_criteria(&next).await.unwrap(), 0);

    let mut unset = FiltersCriteria::new();
    unset.crawler_id().push(RangeCondition::Specified(false));
    assert_eq!(repo.find_by_criteria(&unset).await.unwrap(), vec![detached]);

    assert!(crawlers.delete_by_id(crawler).await.unwrap());
    let reloaded = repo.find_by_id(owned.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(reloaded.crawler_id, None);
    assert_eq!(repo.count_by_criteria(&unset).await.unwrap(), 2);
}
