pub mod statuses {
    pub const PUBLIC_TIMELINE: &'static str =
        "https://api.twitter.com/1/statuses/public_timeline.json";
    pub const HOME_TIMELINE: &'static str =
        "https://api.twitter.com/1/statuses/home_timeline.json";
    pub const USER_TIMELINE: &'static str =
        "https://api.twitter.com/1/statuses/user_timeline.json";
    pub const MENTIONS: &'static str = "https://api.twitter.com/1/statuses/mentions.json";
    pub const SHOW: &'static str = "https://api.twitter.com/1/statuses/show.json";
    pub const UPDATE: &'static str = "https://api.twitter.com/1/statuses/update.json";
    pub const DESTROY: &'static str = "https://api.twitter.com/1/statuses/destroy.json";
    pub const RETWEET_STEM: &'static str = "https://api.twitter.com/1/statuses/retweet";
}

pub mod users {
    pub const SHOW: &'static str = "https://api.twitter.com/1/users/show.json";
    pub const FRIENDS_IDS: &'static str = "https://api.twitter.com/1/friends/ids.json";
    pub const FOLLOWERS_IDS: &'static str = "https://api.twitter.com/1/followers/ids.json";
    pub const FRIENDS: &'static str = "https://api.twitter.com/1/statuses/friends.json";
    pub const FOLLOWERS: &'static str = "https://api.twitter.com/1/statuses/followers.json";
    pub const FRIENDSHIP_SHOW: &'static str =
        "https://api.twitter.com/1/friendships/show.json";
}

pub mod direct {
    pub const RECEIVED: &'static str = "https://api.twitter.com/1/direct_messages.json";
    pub const SENT: &'static str = "https://api.twitter.com/1/direct_messages/sent.json";
    pub const NEW: &'static str = "https://api.twitter.com/1/direct_messages/new.json";
}

pub mod lists {
    pub const OWNERSHIPS: &'static str = "https://api.twitter.com/1/lists.json";
    pub const MEMBERSHIPS: &'static str =
        "https://api.twitter.com/1/lists/memberships.json";
    pub const SUBSCRIPTIONS: &'static str =
        "https://api.twitter.com/1/lists/subscriptions.json";
}

pub mod trends {
    pub const TRENDS: &'static str = "https://search.twitter.com/trends.json";
    pub const CURRENT: &'static str = "https://api.twitter.com/1/trends/current.json";
    pub const DAILY: &'static str = "https://api.twitter.com/1/trends/daily.json";
    pub const WEEKLY: &'static str = "https://api.twitter.com/1/trends/weekly.json";
}

pub mod search {
    pub const SEARCH: &'static str = "https://search.twitter.com/search.json";
}

pub mod saved_searches {
    pub const LIST: &'static str = "https://api.twitter.com/1/saved_searches.json";
}

pub mod account {
    pub const RATE_LIMIT_STATUS: &'static str =
        "https://api.twitter.com/1/account/rate_limit_status.json";
}
