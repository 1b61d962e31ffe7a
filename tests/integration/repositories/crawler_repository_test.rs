// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use crawlcfg::domain::criteria::{
    CrawlerCriteria, PageRequest, RangeCondition, SortOrder, StringCondition,
};
use crawlcfg::domain::models::crawler::Crawler;
use crawlcfg::domain::repositories::crawler_repository::CrawlerRepository;
use crawlcfg::domain::repositories::RepositoryError;
use crawlcfg::infrastructure::repositories::crawler_repo_impl::CrawlerRepositoryImpl;

async fn seeded_repo() -> (CrawlerRepositoryImpl, Vec<Crawler>) {
    let repo = CrawlerRepositoryImpl::new(create_test_db().await);
    let mut saved = Vec::new();
    for (name, fetch, source) in [
        ("alpha", -1, "rss"),
        ("beta", 0, "html"),
        ("gamma", 2, "rss"),
        ("delta", 5, "api"),
        ("epsilon", 5, "html"),
    ] {
        saved.push(repo.save(&Crawler::new(name, fetch, source)).await.unwrap());
    }
    (repo, saved)
}

/// 列表、计数和逐页遍历必须一致
async fn assert_consistent(repo: &CrawlerRepositoryImpl, criteria: &CrawlerCriteria) {
    let listed = repo.find_by_criteria(criteria).await.unwrap();
    let count = repo.count_by_criteria(criteria).await.unwrap();
    assert_eq!(count as usize, listed.len(), "{:?}", criteria);

    for size in 1..=3 {
        let mut total = 0;
        let mut page = 0;
        loop {
            let result = repo
                .find_page_by_criteria(criteria, &PageRequest::new(page, size))
                .await
                .unwrap();
            assert_eq!(result.total_elements, count);
            total += result.content.len();
            if !result.has_next() {
                break;
            }
            page += 1;
        }
        assert_eq!(total, listed.len(), "size {} for {:?}", size, criteria);
    }
}

#[tokio::test]
async fn test_save_assigns_id_and_find_by_id_returns_it() {
    let (repo, saved) = seeded_repo().await;
    let first = &saved[0];
    let id = first.id.unwrap();

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.name, "alpha");
    assert_eq!(found.fetch, -1);
    assert!(repo.exists_by_id(id).await.unwrap());
    assert!(!repo.exists_by_id(id + 100).await.unwrap());
}

#[tokio::test]
async fn test_save_with_unknown_id_is_not_found() {
    let (repo, _) = seeded_repo().await;
    let ghost = Crawler::new("ghost", 0, "none").with_id(9999);

    let err = repo.save(&ghost).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound), "{:?}", err);
}

#[tokio::test]
async fn test_delete_by_id_reports_whether_a_row_was_removed() {
    let (repo, saved) = seeded_repo().await;
    let id = saved[1].id.unwrap();

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(!repo.delete_by_id(id).await.unwrap());
    assert_eq!(
        repo.count_by_criteria(&CrawlerCriteria::default())
            .await
            .unwrap(),
        4
    );
}

#[tokio::test]
async fn test_list_count_and_paging_agree() {
    let (repo, _) = seeded_repo().await;

    let mut by_source = CrawlerCriteria::new();
    by_source
        .source()
        .push(StringCondition::Equals("rss".to_string()));

    let mut by_fetch = CrawlerCriteria::new();
    by_fetch
        .fetch()
        .push(RangeCondition::GreaterThanOrEqual(0))
        .push(RangeCondition::LessThan(5));

    let mut by_name = CrawlerCriteria::new();
    by_name
        .name()
        .push(StringCondition::DoesNotContain("ta".to_string()));
    by_name.distinct = Some(true);

    for criteria in [CrawlerCriteria::default(), by_source, by_fetch, by_name] {
        assert_consistent(&repo, &criteria).await;
    }
}

#[tokio::test]
async fn test_page_sorting_is_stable_for_ties() {
    let (repo, saved) = seeded_repo().await;

    let request = PageRequest::new(0, 2).with_sort(SortOrder::desc("fetch"));
    let page = repo
        .find_page_by_criteria(&CrawlerCriteria::default(), &request)
        .await
        .unwrap();

    // delta and epsilon share fetch = 5, id breaks the tie
    let names: Vec<_> = page.content.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["delta", "epsilon"]);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.content[0], saved[3]);
}

#[tokio::test]
async fn test_unknown_sort_property_is_rejected() {
    let (repo, _) = seeded_repo().await;
    let request = PageRequest::new(0, 2).with_sort(SortOrder::asc("color"));

    let err = repo
        .find_page_by_criteria(&CrawlerCriteria::default(), &request)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidSort(ref p) if p == "color"));
}
