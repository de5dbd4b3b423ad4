//! Centralized constants for default endpoints and UA.
//!
//! The endpoints are undocumented and change without notice; keep every path here.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Search-assist resource. The urlencoded search term is appended directly.
pub(crate) const DEFAULT_BASE_SEARCH: &str = concat!(
    "https://finance.yahoo.com/_finance_doubledown/api/resource/searchassist;",
    "gossipConfig=%7B%22queryKey%22:%22query%22,%22resultAccessor%22:%22ResultSet.Result%22,",
    "%22suggestionTitleAccessor%22:%22symbol%22,%22suggestionMeta%22:[%22symbol%22],",
    "%22url%22:%7B%22query%22:%7B%22region%22:%22US%22,%22lang%22:%22en-US%22%7D%7D%7D;",
    "searchTerm="
);

/// Opaque query string the search-assist resource expects after the term.
pub(crate) const SEARCH_QUERY_SUFFIX: &str = concat!(
    "bkt=[%22findd-ctrl%22,%22fin-strm-test1%22,%22fndmtest%22,%22finnossl%22]",
    "&device=desktop",
    "&feature=canvassOffnet,finGrayNav,newContentAttribution,relatedVideoFeature,videoNativePlaylist,livecoverage",
    "&intl=us&lang=en-US&partner=none&prid=eo2okrhcni00f&region=US&site=finance&tz=UTC",
    "&ver=0.102.432&returnMeta=true"
);

/// Yahoo quote HTML base; `{symbol}/history` is appended for the crumb page.
pub(crate) const DEFAULT_BASE_HISTORY_PAGE: &str = "https://finance.yahoo.com/quote/";

/// CSV download API base (symbol is appended).
pub(crate) const DEFAULT_BASE_DOWNLOAD: &str = "https://query1.finance.yahoo.com/v7/finance/download/";

/// Base URL for the Yahoo Finance v7 quote API.
pub(crate) const DEFAULT_BASE_QUOTE_V7: &str = "https://query1.finance.yahoo.com/v7/finance/quote";
