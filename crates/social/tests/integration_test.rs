//! Integration tests for the discovery stack.
//!
//! These run the whole path a caller takes: snapshot JSON -> store ->
//! friend graph -> scores and recommendations.

use catalog::parse_snapshot;
use social::{Discovery, FriendGraph};

/// Two users with one shared liked movie, a friend with distinct taste,
/// and a user with no collections at all
const LIBRARY: &str = r#"{
    "users": [
        {
            "id": "ana",
            "username": "ana",
            "playlists": [
                {
                    "id": "p1",
                    "name": "Liked",
                    "isSystem": true,
                    "movies": [
                        { "id": 1, "title": "Heat", "genre_ids": [28], "vote_average": 8.3 }
                    ]
                }
            ]
        },
        {
            "id": "ben",
            "username": "ben",
            "playlists": [
                {
                    "id": "p2",
                    "name": "Liked",
                    "isSystem": true,
                    "movies": [
                        { "id": 1, "title": "Heat", "genre_ids": [28], "vote_average": 8.3 }
                    ]
                },
                {
                    "id": "p3",
                    "name": "Playlist1",
                    "movies": [
                        { "id": 2, "title": "Ronin", "genre_ids": [28], "vote_average": 7.3 }
                    ]
                }
            ]
        },
        {
            "id": "cleo",
            "username": "cleo",
            "playlists": [
                {
                    "id": "p4",
                    "name": "Watched",
                    "isSystem": true,
                    "movies": [
                        { "id": 3, "title": "Amelie", "genre_ids": [35, 10749], "vote_average": 7.9 },
                        { "id": 4, "title": "Chocolat", "genre_ids": [10749], "vote_average": 7.2 }
                    ]
                }
            ]
        },
        { "id": "dana", "username": "dana" }
    ],
    "friendships": [
        { "id": "f1", "requesterId": "ana", "recipientId": "ben", "status": "accepted" },
        { "id": "f2", "requesterId": "cleo", "recipientId": "ana", "status": "pending" }
    ]
}"#;

#[test]
fn worked_compatibility_scenario() {
    let store = parse_snapshot(LIBRARY).unwrap();
    let discovery = Discovery::new(&store);

    // intersection {1}, union {1, 2}; both profiles 100% Action
    let compat = discovery.compatibility("ana", "ben").unwrap();
    assert_eq!(compat.movie_overlap, 50);
    assert_eq!(compat.genre_match, 100);
    assert_eq!(compat.blend, 75);

    // symmetric
    let reverse = discovery.compatibility("ben", "ana").unwrap();
    assert_eq!(reverse.blend, 75);
}

#[test]
fn shared_recommendations_exclude_seen_movies() {
    let store = parse_snapshot(LIBRARY).unwrap();
    let discovery = Discovery::new(&store);

    let recs = discovery.shared_recommendations("ana", "ben").unwrap();
    assert!(recs.len() <= 6);
    let ids: Vec<u32> = recs.iter().map(|m| m.id).collect();
    // Movie 1 is already in ana's library; only Ronin qualifies
    assert_eq!(ids, vec![2]);
}

#[test]
fn personalized_recommendations_rank_by_score() {
    let store = parse_snapshot(LIBRARY).unwrap();
    let discovery = Discovery::new(&store);

    // cleo's profile is Comedy/Romance; ana and ben hold only Action, so
    // nothing matches her targets
    let for_cleo = discovery.personalized_recommendations("cleo").unwrap();
    assert!(for_cleo.is_empty());

    // ana targets Action and finds Ronin in ben's playlists
    let for_ana = discovery.personalized_recommendations("ana").unwrap();
    assert!(for_ana.len() <= 8);
    assert_eq!(for_ana[0].movie.id, 2);
    // rating 7.3 + 100% Action share bonus of 3.0
    assert!((for_ana[0].score - 10.3).abs() < 0.01);
    for pair in for_ana.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn empty_user_degrades_to_zero_everywhere() {
    let store = parse_snapshot(LIBRARY).unwrap();
    let discovery = Discovery::new(&store);

    assert!(discovery.taste_profile("dana").unwrap().is_empty());
    assert_eq!(discovery.compatibility("dana", "ana").unwrap().blend, 0);
    assert!(discovery.personalized_recommendations("dana").unwrap().is_empty());
}

#[test]
fn friend_graph_lifecycle_feeds_matches() {
    let store = parse_snapshot(LIBRARY).unwrap();
    let discovery = Discovery::new(&store);
    let mut graph = FriendGraph::from_edges(store.friendships().to_vec());

    // ana sees ben (accepted) but not cleo (still pending)
    let matches = discovery.friend_matches("ana", &graph).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].user.id, "ben");
    assert_eq!(matches[0].compatibility, 75);

    // the pending request surfaces for ana, with cleo resolved
    let requests = discovery.friend_requests("ana", &graph).unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].user.id, "cleo");

    // accepting promotes cleo into the match list
    graph.accept("f2", "ana").unwrap();
    let matches = discovery.friend_matches("ana", &graph).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].user.id, "ben");
    assert_eq!(matches[1].user.id, "cleo");
}

#[test]
fn unknown_subject_fails_the_contract() {
    let store = parse_snapshot(LIBRARY).unwrap();
    let discovery = Discovery::new(&store);

    let err = discovery.personalized_recommendations("ghost").unwrap_err();
    assert!(err.to_string().contains("ghost"));
}
