//! Builtin platform slug grammars.
//!
//! One record per supported review platform. Adding a platform is a
//! data-entry operation: append an `entry(...)` call, keep patterns ordered
//! most-specific first, and make every `acceptable_formats` value a variant of
//! the same listing so the conformance sweep can check they collapse to one
//! slug.
//!
//! A few records (`carfax`, `judysbook`, `showmelocal`) keep their patterns in
//! the legacy `@...@i` delimited form inherited from the original dataset; see
//! `SlugPattern::parse`.

use crate::models::platform::{PlatformSlugFormat, SlugPattern};

fn entry(
    platform_key: &'static str,
    example_url: &'static str,
    acceptable_formats: &[&'static str],
    patterns: &[&'static str],
    lower_cased: bool,
) -> PlatformSlugFormat {
    PlatformSlugFormat {
        platform_key,
        example_url,
        acceptable_formats: acceptable_formats.to_vec(),
        patterns: patterns.iter().map(|raw| SlugPattern::parse(raw)).collect(),
        lower_cased,
    }
}

/// The full builtin dataset, in data-entry order.
pub fn builtin_entries() -> Vec<PlatformSlugFormat> {
    vec![
        // General and local directories
        entry(
            "google",
            "https://www.google.com/maps?cid=472717649119152494",
            &[
                "https://www.google.com/maps?cid=472717649119152494",
                "google.com/maps?cid=472717649119152494",
                "472717649119152494",
            ],
            &[
                // Bare 27-character place ID, case-significant.
                r"^([A-Za-z0-9_-]{27})$",
                r"^(?:https?://)?(?:www\.)?google\.[a-z.]+/maps/place/[^?#]*\?q=place_id:([A-Za-z0-9_-]+)(?:[&#].*)?$",
                r"^(?:https?://)?(?:www\.)?google\.[a-z.]+/maps[^?#]*\?(?:[^#]*&)?cid=(\d+)(?:[&#].*)?$",
                r"^(?:https?://)?(?:www\.)?google\.[a-z.]+/[^?#]*[?&]ludocid=(\d+)(?:[&#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "yelp",
            "https://www.yelp.com/biz/the-cheesecake-factory-san-diego",
            &[
                "https://www.yelp.com/biz/the-cheesecake-factory-san-diego",
                "yelp.com/biz/the-cheesecake-factory-san-diego",
                "the-cheesecake-factory-san-diego",
            ],
            &[
                r"^(?:https?://)?(?:www\.|m\.)?yelp\.[a-z.]+/biz/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9._%-]*)$",
            ],
            true,
        ),
        entry(
            "facebook",
            "https://www.facebook.com/PremiatoFornoCantoni",
            &[
                "https://www.facebook.com/PremiatoFornoCantoni",
                "facebook.com/PremiatoFornoCantoni",
                "PremiatoFornoCantoni",
            ],
            &[
                r"^(?:https?://)?(?:www\.|m\.|web\.|business\.)?facebook\.com/pages/[^/?#]+/(\d+)/?(?:[?#].*)?$",
                r"^(?:https?://)?(?:www\.|m\.)?facebook\.com/profile\.php\?(?:[^#]*&)?id=(\d+)(?:[&#].*)?$",
                r"^(?:https?://)?(?:www\.|m\.|web\.)?facebook\.com/(?:pg/)?([A-Za-z0-9.\-]+)(?:/(?:about|reviews))?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9.\-]+)$",
            ],
            true,
        ),
        entry(
            "tripadvisor",
            "https://www.tripadvisor.com/Restaurant_Review-g60750-d348853-Reviews-The_Cheesecake_Factory-San_Diego_California.html",
            &[
                "https://www.tripadvisor.com/Restaurant_Review-g60750-d348853-Reviews-The_Cheesecake_Factory-San_Diego_California.html",
                "tripadvisor.com/Restaurant_Review-g60750-d348853-Reviews-The_Cheesecake_Factory-San_Diego_California.html",
                "Restaurant_Review-g60750-d348853-Reviews-The_Cheesecake_Factory-San_Diego_California",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?tripadvisor\.[a-z.]+/([A-Za-z]+_Review-[^/?#\s]+?)(?:\.html)?/?(?:[?#].*)?$",
                r"^([A-Za-z]+_Review-[^/?#\s]+?)(?:\.html)?$",
            ],
            false,
        ),
        entry(
            "trustpilot",
            "https://www.trustpilot.com/review/acmewidgets.com",
            &[
                "https://www.trustpilot.com/review/acmewidgets.com",
                "trustpilot.com/review/acmewidgets.com",
                "acmewidgets.com",
            ],
            &[
                r"^(?:https?://)?(?:[a-z]{2}\.|www\.)?trustpilot\.com/review/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^((?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,})$",
            ],
            true,
        ),
        entry(
            "bbb",
            "https://www.bbb.org/us/ca/san-diego/profile/restaurant/acme-widgets-1126-90012345",
            &[
                "https://www.bbb.org/us/ca/san-diego/profile/restaurant/acme-widgets-1126-90012345",
                "bbb.org/us/ca/san-diego/profile/restaurant/acme-widgets-1126-90012345",
                "acme-widgets-1126-90012345",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?bbb\.org/(?:us|ca)/[a-z-]+/[a-z-]+/profile/[^/?#]+/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "yellowpages",
            "https://www.yellowpages.com/san-diego-ca/mip/acme-widgets-481234567",
            &[
                "https://www.yellowpages.com/san-diego-ca/mip/acme-widgets-481234567",
                "yellowpages.com/san-diego-ca/mip/acme-widgets-481234567",
                "acme-widgets-481234567",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?yellowpages\.com/[^/?#]+/mip/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "superpages",
            "https://www.superpages.com/bp/san-diego-ca/acme-widgets-L0123456789.htm",
            &[
                "https://www.superpages.com/bp/san-diego-ca/acme-widgets-L0123456789.htm",
                "superpages.com/bp/san-diego-ca/acme-widgets-L0123456789.htm",
                "acme-widgets-L0123456789",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?superpages\.com/bp/[^/?#]+/([^/?#\s]+?)(?:\.htm)?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "manta",
            "https://www.manta.com/c/mml6zbk/acme-widgets",
            &[
                "https://www.manta.com/c/mml6zbk/acme-widgets",
                "manta.com/c/mml6zbk/acme-widgets",
                "mml6zbk",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?manta\.com/c/([A-Za-z0-9]+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^([A-Za-z0-9]{5,12})$",
            ],
            true,
        ),
        entry(
            "citysearch",
            "https://www.citysearch.com/profile/738291645/san_diego_ca/acme_widgets.html",
            &[
                "https://www.citysearch.com/profile/738291645/san_diego_ca/acme_widgets.html",
                "citysearch.com/profile/738291645/san_diego_ca/acme_widgets.html",
                "738291645",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?citysearch\.com/profile/(\d+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "mapquest",
            "https://www.mapquest.com/us/california/acme-widgets-282938401",
            &[
                "https://www.mapquest.com/us/california/acme-widgets-282938401",
                "mapquest.com/us/california/acme-widgets-282938401",
                "282938401",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?mapquest\.com/[^?#]*-(\d+)/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "foursquare",
            "https://foursquare.com/v/acme-widgets/4b5f2a8cf964a520d0c629e3",
            &[
                "https://foursquare.com/v/acme-widgets/4b5f2a8cf964a520d0c629e3",
                "foursquare.com/v/acme-widgets/4b5f2a8cf964a520d0c629e3",
                "4b5f2a8cf964a520d0c629e3",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?foursquare\.com/v/[^/?#]+/([0-9a-f]{24})/?(?:[?#].*)?$",
                r"^([0-9a-f]{24})$",
            ],
            false,
        ),
        entry(
            "nextdoor",
            "https://nextdoor.com/pages/acme-widgets-san-diego-ca",
            &[
                "https://nextdoor.com/pages/acme-widgets-san-diego-ca",
                "nextdoor.com/pages/acme-widgets-san-diego-ca",
                "acme-widgets-san-diego-ca",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?nextdoor\.com/pages/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "alignable",
            "https://www.alignable.com/san-diego-ca/acme-widgets",
            &[
                "https://www.alignable.com/san-diego-ca/acme-widgets",
                "alignable.com/san-diego-ca/acme-widgets",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?alignable\.com/[^/?#]+/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "groupon",
            "https://www.groupon.com/biz/san-diego/acme-widgets",
            &[
                "https://www.groupon.com/biz/san-diego/acme-widgets",
                "groupon.com/biz/san-diego/acme-widgets",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?groupon\.com/biz/[^/?#]+/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "judysbook",
            "https://www.judysbook.com/AcmeWidgets-BtoB-sandiego-ca-r30582934.htm",
            &[
                "https://www.judysbook.com/AcmeWidgets-BtoB-sandiego-ca-r30582934.htm",
                "judysbook.com/AcmeWidgets-BtoB-sandiego-ca-r30582934.htm",
                "30582934",
            ],
            &[
                r"@^(?:https?://)?(?:www\.)?judysbook\.com/[^?#]*r(\d+)\.htm(?:[?#].*)?$@i",
                r"@^(\d+)$@i",
            ],
            false,
        ),
        entry(
            "insiderpages",
            "https://www.insiderpages.com/b/15254061728/acme-widgets-san-diego",
            &[
                "https://www.insiderpages.com/b/15254061728/acme-widgets-san-diego",
                "insiderpages.com/b/15254061728/acme-widgets-san-diego",
                "15254061728",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?insiderpages\.com/b/(\d+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "showmelocal",
            "https://www.showmelocal.com/profile.aspx?bid=17395648",
            &[
                "https://www.showmelocal.com/profile.aspx?bid=17395648",
                "showmelocal.com/profile.aspx?bid=17395648",
                "17395648",
            ],
            &[
                r"@^(?:https?://)?(?:www\.)?showmelocal\.com/profile\.aspx\?(?:[^#]*&)?bid=(\d+)(?:[&#].*)?$@i",
                r"@^(\d+)$@i",
            ],
            false,
        ),
        entry(
            "brownbook",
            "https://www.brownbook.net/business/50291847/acme-widgets",
            &[
                "https://www.brownbook.net/business/50291847/acme-widgets",
                "brownbook.net/business/50291847/acme-widgets",
                "50291847",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?brownbook\.net/business/(\d+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "hotfrog",
            "https://www.hotfrog.com/company/1043592817636352",
            &[
                "https://www.hotfrog.com/company/1043592817636352",
                "hotfrog.com/company/1043592817636352",
                "1043592817636352",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?hotfrog\.com/company/(\d+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "cylex",
            "https://www.cylex.us.com/company/acme-widgets-30584921.html",
            &[
                "https://www.cylex.us.com/company/acme-widgets-30584921.html",
                "cylex.us.com/company/acme-widgets-30584921.html",
                "30584921",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?cylex(?:-[a-z]+)?\.[a-z.]+/company/[^?#]*-(\d+)\.html(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        // Software and B2B review sites
        entry(
            "g2",
            "https://www.g2.com/products/acme-analytics/reviews",
            &[
                "https://www.g2.com/products/acme-analytics/reviews",
                "g2.com/products/acme-analytics/reviews",
                "acme-analytics",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?g2\.com/products/([^/?#\s]+)(?:/reviews)?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "capterra",
            "https://www.capterra.com/p/186596/Acme-Analytics/",
            &[
                "https://www.capterra.com/p/186596/Acme-Analytics/",
                "capterra.com/p/186596/Acme-Analytics/",
                "186596",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?capterra\.[a-z.]+/p/(\d+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "trustradius",
            "https://www.trustradius.com/products/acme-analytics/reviews",
            &[
                "https://www.trustradius.com/products/acme-analytics/reviews",
                "trustradius.com/products/acme-analytics/reviews",
                "acme-analytics",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?trustradius\.com/products/([^/?#\s]+)(?:/reviews)?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "producthunt",
            "https://www.producthunt.com/products/acme-analytics",
            &[
                "https://www.producthunt.com/products/acme-analytics",
                "producthunt.com/products/acme-analytics",
                "acme-analytics",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?producthunt\.com/(?:products|posts)/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "softwareadvice",
            "https://www.softwareadvice.com/crm/acme-analytics-profile/",
            &[
                "https://www.softwareadvice.com/crm/acme-analytics-profile/",
                "softwareadvice.com/crm/acme-analytics-profile/",
                "acme-analytics",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?softwareadvice\.com/[^/?#]+/([^/?#\s]+?)-profile/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*?)(?:-profile)?$",
            ],
            true,
        ),
        entry(
            "getapp",
            "https://www.getapp.com/customer-management-software/a/acme-analytics/",
            &[
                "https://www.getapp.com/customer-management-software/a/acme-analytics/",
                "getapp.com/customer-management-software/a/acme-analytics/",
                "acme-analytics",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?getapp\.[a-z.]+/[^/?#]+/a/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "gartner",
            "https://www.gartner.com/reviews/market/crm/vendor/acme/product/acme-analytics",
            &[
                "https://www.gartner.com/reviews/market/crm/vendor/acme/product/acme-analytics",
                "gartner.com/reviews/market/crm/vendor/acme/product/acme-analytics",
                "acme-analytics",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?gartner\.com/reviews/market/[^/?#]+/vendor/[^/?#]+/product/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^(?:https?://)?(?:www\.)?gartner\.com/reviews/market/[^/?#]+/vendor/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "goodfirms",
            "https://www.goodfirms.co/company/acme-analytics",
            &[
                "https://www.goodfirms.co/company/acme-analytics",
                "goodfirms.co/company/acme-analytics",
                "acme-analytics",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?goodfirms\.co/company/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "clutch",
            "https://clutch.co/profile/acme-analytics",
            &[
                "https://clutch.co/profile/acme-analytics",
                "clutch.co/profile/acme-analytics",
                "acme-analytics",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?clutch\.co/profile/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        // Employers
        entry(
            "glassdoor",
            "https://www.glassdoor.com/Reviews/Acme-Widgets-Reviews-E1058394.htm",
            &[
                "https://www.glassdoor.com/Reviews/Acme-Widgets-Reviews-E1058394.htm",
                "glassdoor.com/Reviews/Acme-Widgets-Reviews-E1058394.htm",
                "E1058394",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?glassdoor\.[a-z.]+/Reviews/[^/?#]*-E(\d+)\.htm(?:[?#].*)?$",
                r"^E?(\d+)$",
            ],
            false,
        ),
        entry(
            "indeed",
            "https://www.indeed.com/cmp/Acme-Widgets",
            &[
                "https://www.indeed.com/cmp/Acme-Widgets",
                "indeed.com/cmp/Acme-Widgets",
                "Acme-Widgets",
            ],
            &[
                r"^(?:https?://)?(?:[a-z]{2}\.|www\.)?indeed\.com/cmp/([^/?#\s]+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9.-]*)$",
            ],
            true,
        ),
        // App marketplaces and commerce
        entry(
            "apple",
            "https://apps.apple.com/us/app/acme-widgets/id1529387465",
            &[
                "https://apps.apple.com/us/app/acme-widgets/id1529387465",
                "apps.apple.com/us/app/acme-widgets/id1529387465",
                "1529387465",
            ],
            &[
                r"^(?:https?://)?(?:apps\.|itunes\.)?apple\.com/(?:[a-z]{2}/)?app/[^/?#]+/id(\d+)/?(?:[?#].*)?$",
                r"^(?:id)?(\d+)$",
            ],
            false,
        ),
        entry(
            "googleplay",
            "https://play.google.com/store/apps/details?id=com.acme.widgets",
            &[
                "https://play.google.com/store/apps/details?id=com.acme.widgets",
                "play.google.com/store/apps/details?id=com.acme.widgets",
                "com.acme.widgets",
            ],
            &[
                r"^(?:https?://)?play\.google\.com/store/apps/details\?(?:[^#]*&)?id=([A-Za-z0-9._]+)(?:[&#].*)?$",
                r"^([A-Za-z][A-Za-z0-9_]*(?:\.[A-Za-z0-9_]+)+)$",
            ],
            false,
        ),
        entry(
            "chromewebstore",
            "https://chromewebstore.google.com/detail/acme-widgets/abcdefghijklmnopabcdefghijklmnop",
            &[
                "https://chromewebstore.google.com/detail/acme-widgets/abcdefghijklmnopabcdefghijklmnop",
                "chromewebstore.google.com/detail/acme-widgets/abcdefghijklmnopabcdefghijklmnop",
                "abcdefghijklmnopabcdefghijklmnop",
            ],
            &[
                r"^(?:https?://)?(?:chromewebstore\.google\.com|chrome\.google\.com/webstore)/detail/[^/?#]+/([a-p]{32})/?(?:[?#].*)?$",
                r"^([a-p]{32})$",
            ],
            false,
        ),
        entry(
            "amazon",
            "https://www.amazon.com/dp/B08N5WRWNW",
            &[
                "https://www.amazon.com/dp/B08N5WRWNW",
                "amazon.com/dp/B08N5WRWNW",
                "B08N5WRWNW",
            ],
            &[
                r"^(?:https?://)?(?:www\.|smile\.)?amazon\.[a-z.]+/(?:[^?#]*/)?(?:dp|gp/product|product-reviews)/([A-Z0-9]{10})/?(?:[?#].*)?$",
                r"^([A-Z0-9]{10})$",
            ],
            false,
        ),
        entry(
            "etsy",
            "https://www.etsy.com/shop/AcmeWidgets",
            &[
                "https://www.etsy.com/shop/AcmeWidgets",
                "etsy.com/shop/AcmeWidgets",
                "AcmeWidgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?etsy\.com/shop/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9_-]*)$",
            ],
            true,
        ),
        entry(
            "ebay",
            "https://www.ebay.com/usr/acmewidgets",
            &[
                "https://www.ebay.com/usr/acmewidgets",
                "ebay.com/usr/acmewidgets",
                "acmewidgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?ebay\.[a-z.]+/(?:usr|str)/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9_-]*)$",
            ],
            true,
        ),
        entry(
            "walmart",
            "https://www.walmart.com/seller/17305892",
            &[
                "https://www.walmart.com/seller/17305892",
                "walmart.com/seller/17305892",
                "17305892",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?walmart\.com/(?:seller|reviews/seller)/(\d+)/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        // Consumer-brand review sites
        entry(
            "sitejabber",
            "https://www.sitejabber.com/reviews/acmewidgets.com",
            &[
                "https://www.sitejabber.com/reviews/acmewidgets.com",
                "sitejabber.com/reviews/acmewidgets.com",
                "acmewidgets.com",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?sitejabber\.com/reviews/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^((?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,})$",
            ],
            true,
        ),
        entry(
            "resellerratings",
            "https://www.resellerratings.com/store/AcmeWidgets",
            &[
                "https://www.resellerratings.com/store/AcmeWidgets",
                "resellerratings.com/store/AcmeWidgets",
                "AcmeWidgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?resellerratings\.com/store/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9_-]*)$",
            ],
            true,
        ),
        entry(
            "consumeraffairs",
            "https://www.consumeraffairs.com/online/acme-widgets.html",
            &[
                "https://www.consumeraffairs.com/online/acme-widgets.html",
                "consumeraffairs.com/online/acme-widgets.html",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?consumeraffairs\.com/[^/?#]+/([^/?#\s]+?)(?:\.html)?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "influenster",
            "https://www.influenster.com/reviews/acme-widgets",
            &[
                "https://www.influenster.com/reviews/acme-widgets",
                "influenster.com/reviews/acme-widgets",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?influenster\.com/reviews/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        // Restaurants, delivery, travel
        entry(
            "opentable",
            "https://www.opentable.com/r/acme-bistro-san-diego",
            &[
                "https://www.opentable.com/r/acme-bistro-san-diego",
                "opentable.com/r/acme-bistro-san-diego",
                "acme-bistro-san-diego",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?opentable\.[a-z.]+/r/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "zomato",
            "https://www.zomato.com/sandiego/acme-bistro-gaslamp",
            &[
                "https://www.zomato.com/sandiego/acme-bistro-gaslamp",
                "zomato.com/sandiego/acme-bistro-gaslamp",
                "acme-bistro-gaslamp",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?zomato\.com/[^/?#]+/([^/?#\s]+?)(?:/(?:info|reviews|menu))?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "grubhub",
            "https://www.grubhub.com/restaurant/acme-bistro-655-5th-ave-san-diego/2819304",
            &[
                "https://www.grubhub.com/restaurant/acme-bistro-655-5th-ave-san-diego/2819304",
                "grubhub.com/restaurant/acme-bistro-655-5th-ave-san-diego/2819304",
                "2819304",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?grubhub\.com/restaurant/[^/?#]+/(\d+)/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "doordash",
            "https://www.doordash.com/store/acme-bistro-san-diego-1048276/",
            &[
                "https://www.doordash.com/store/acme-bistro-san-diego-1048276/",
                "doordash.com/store/acme-bistro-san-diego-1048276/",
                "acme-bistro-san-diego-1048276",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?doordash\.com/store/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "ubereats",
            "https://www.ubereats.com/store/acme-bistro/K8mBkW3hQxOLkPrsR2vQzw",
            &[
                "https://www.ubereats.com/store/acme-bistro/K8mBkW3hQxOLkPrsR2vQzw",
                "ubereats.com/store/acme-bistro/K8mBkW3hQxOLkPrsR2vQzw",
                "K8mBkW3hQxOLkPrsR2vQzw",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?ubereats\.com/store/[^/?#]+/([A-Za-z0-9_-]{22,36})/?(?:[?#].*)?$",
                r"^([A-Za-z0-9_-]{22,36})$",
            ],
            false,
        ),
        entry(
            "booking",
            "https://www.booking.com/hotel/us/acme-harbor.html",
            &[
                "https://www.booking.com/hotel/us/acme-harbor.html",
                "booking.com/hotel/us/acme-harbor.html",
                "us/acme-harbor",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?booking\.com/hotel/([A-Za-z]{2}/[^/?#\s]+?)(?:\.html)?/?(?:[?#].*)?$",
                r"^([A-Za-z]{2}/[A-Za-z0-9.-]+?)(?:\.html)?$",
            ],
            true,
        ),
        entry(
            "expedia",
            "https://www.expedia.com/San-Diego-Hotels-Acme-Harbor.h2839401.Hotel-Information",
            &[
                "https://www.expedia.com/San-Diego-Hotels-Acme-Harbor.h2839401.Hotel-Information",
                "expedia.com/San-Diego-Hotels-Acme-Harbor.h2839401.Hotel-Information",
                "2839401",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?expedia\.[a-z.]+/[^?#]*\.h(\d+)\.[^?#]*(?:[?#].*)?$",
                r"^h?(\d+)$",
            ],
            false,
        ),
        entry(
            "hotels",
            "https://www.hotels.com/ho483920/acme-harbor-hotel-san-diego/",
            &[
                "https://www.hotels.com/ho483920/acme-harbor-hotel-san-diego/",
                "hotels.com/ho483920/acme-harbor-hotel-san-diego/",
                "483920",
            ],
            &[
                r"^(?:https?://)?(?:[a-z]{2}\.|www\.)?hotels\.com/ho(\d+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^(?:ho)?(\d+)$",
            ],
            false,
        ),
        entry(
            "agoda",
            "https://www.agoda.com/acme-harbor-hotel/hotel/san-diego-ca-us.html",
            &[
                "https://www.agoda.com/acme-harbor-hotel/hotel/san-diego-ca-us.html",
                "agoda.com/acme-harbor-hotel/hotel/san-diego-ca-us.html",
                "acme-harbor-hotel",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?agoda\.com/([^/?#\s]+)/hotel(?:/[^?#]*)?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "airbnb",
            "https://www.airbnb.com/rooms/28391047",
            &[
                "https://www.airbnb.com/rooms/28391047",
                "airbnb.com/rooms/28391047",
                "28391047",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?airbnb\.[a-z.]+/rooms/(\d+)/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "vrbo",
            "https://www.vrbo.com/2839104",
            &[
                "https://www.vrbo.com/2839104",
                "vrbo.com/2839104",
                "2839104",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?vrbo\.com/(\d+)(?:ha)?/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        // Healthcare
        entry(
            "healthgrades",
            "https://www.healthgrades.com/physician/dr-jane-doe-2x7f4",
            &[
                "https://www.healthgrades.com/physician/dr-jane-doe-2x7f4",
                "healthgrades.com/physician/dr-jane-doe-2x7f4",
                "dr-jane-doe-2x7f4",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?healthgrades\.com/(?:physician|dentist|provider)/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "zocdoc",
            "https://www.zocdoc.com/doctor/jane-doe-md-48213",
            &[
                "https://www.zocdoc.com/doctor/jane-doe-md-48213",
                "zocdoc.com/doctor/jane-doe-md-48213",
                "jane-doe-md-48213",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?zocdoc\.com/(?:doctor|dentist)/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "ratemds",
            "https://www.ratemds.com/doctor-ratings/dr-jane-doe-san-diego-ca-us",
            &[
                "https://www.ratemds.com/doctor-ratings/dr-jane-doe-san-diego-ca-us",
                "ratemds.com/doctor-ratings/dr-jane-doe-san-diego-ca-us",
                "dr-jane-doe-san-diego-ca-us",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?ratemds\.com/doctor-ratings/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "vitals",
            "https://www.vitals.com/doctors/Dr_Jane_Doe.html",
            &[
                "https://www.vitals.com/doctors/Dr_Jane_Doe.html",
                "vitals.com/doctors/Dr_Jane_Doe.html",
                "Dr_Jane_Doe",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?vitals\.com/doctors/([^/?#\s]+?)(?:\.html)?/?(?:[?#].*)?$",
                r"^([A-Za-z][A-Za-z0-9_]*)$",
            ],
            false,
        ),
        entry(
            "webmd",
            "https://doctor.webmd.com/doctor/jane-doe-8f2a7c1b",
            &[
                "https://doctor.webmd.com/doctor/jane-doe-8f2a7c1b",
                "doctor.webmd.com/doctor/jane-doe-8f2a7c1b",
                "jane-doe-8f2a7c1b",
            ],
            &[
                r"^(?:https?://)?(?:doctor\.|www\.)?webmd\.com/doctor/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "realself",
            "https://www.realself.com/dr/jane-doe-san-diego-ca",
            &[
                "https://www.realself.com/dr/jane-doe-san-diego-ca",
                "realself.com/dr/jane-doe-san-diego-ca",
                "jane-doe-san-diego-ca",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?realself\.com/dr/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "practo",
            "https://www.practo.com/bangalore/doctor/jane-doe-dermatologist",
            &[
                "https://www.practo.com/bangalore/doctor/jane-doe-dermatologist",
                "practo.com/bangalore/doctor/jane-doe-dermatologist",
                "jane-doe-dermatologist",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?practo\.com/[^/?#]+/doctor/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        // Legal
        entry(
            "avvo",
            "https://www.avvo.com/attorneys/92101-ca-jane-doe-2849301.html",
            &[
                "https://www.avvo.com/attorneys/92101-ca-jane-doe-2849301.html",
                "avvo.com/attorneys/92101-ca-jane-doe-2849301.html",
                "92101-ca-jane-doe-2849301",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?avvo\.com/attorneys/([^/?#\s]+?)(?:\.html)?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "lawyers",
            "https://www.lawyers.com/san-diego/california/acme-law-firm-1539274-f/",
            &[
                "https://www.lawyers.com/san-diego/california/acme-law-firm-1539274-f/",
                "lawyers.com/san-diego/california/acme-law-firm-1539274-f/",
                "acme-law-firm-1539274-f",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?lawyers\.com/(?:[^/?#]+/)*([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "findlaw",
            "https://lawyers.findlaw.com/profile/view/2849301_1",
            &[
                "https://lawyers.findlaw.com/profile/view/2849301_1",
                "lawyers.findlaw.com/profile/view/2849301_1",
                "2849301_1",
            ],
            &[
                r"^(?:https?://)?(?:lawyers\.|www\.)?findlaw\.com/profile/view/([0-9_]+)/?(?:[?#].*)?$",
                r"^([0-9]+_[0-9]+)$",
            ],
            false,
        ),
        entry(
            "martindale",
            "https://www.martindale.com/attorney/jane-doe-289431052/",
            &[
                "https://www.martindale.com/attorney/jane-doe-289431052/",
                "martindale.com/attorney/jane-doe-289431052/",
                "289431052",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?martindale\.com/(?:attorney|organization)/[^/?#]*-(\d+)/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        // Home services and trades
        entry(
            "angi",
            "https://www.angi.com/companylist/us/ca/san-diego/acme-widgets-reviews-2849301.htm",
            &[
                "https://www.angi.com/companylist/us/ca/san-diego/acme-widgets-reviews-2849301.htm",
                "angi.com/companylist/us/ca/san-diego/acme-widgets-reviews-2849301.htm",
                "2849301",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?(?:angi|angieslist)\.com/companylist/[^?#]*-(\d+)\.htm(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "homeadvisor",
            "https://www.homeadvisor.com/rated.AcmeWidgets.28493015.html",
            &[
                "https://www.homeadvisor.com/rated.AcmeWidgets.28493015.html",
                "homeadvisor.com/rated.AcmeWidgets.28493015.html",
                "28493015",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?homeadvisor\.com/rated\.[^?#]+\.(\d+)\.html(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "houzz",
            "https://www.houzz.com/pro/acme-widgets",
            &[
                "https://www.houzz.com/pro/acme-widgets",
                "houzz.com/pro/acme-widgets",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?houzz\.[a-z.]+/pro/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "thumbtack",
            "https://www.thumbtack.com/ca/san-diego/handyman/acme-widgets/service",
            &[
                "https://www.thumbtack.com/ca/san-diego/handyman/acme-widgets/service",
                "thumbtack.com/ca/san-diego/handyman/acme-widgets/service",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?thumbtack\.com/[a-z]{2}/[^/?#]+/[^/?#]+/([^/?#\s]+)(?:/service)?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "porch",
            "https://porch.com/san-diego-ca/handymen/acme-widgets/pp",
            &[
                "https://porch.com/san-diego-ca/handymen/acme-widgets/pp",
                "porch.com/san-diego-ca/handymen/acme-widgets/pp",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?porch\.com/[^/?#]+/[^/?#]+/([^/?#\s]+)(?:/pp)?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "buildzoom",
            "https://www.buildzoom.com/contractor/acme-widgets",
            &[
                "https://www.buildzoom.com/contractor/acme-widgets",
                "buildzoom.com/contractor/acme-widgets",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?buildzoom\.com/contractor/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "guildquality",
            "https://www.guildquality.com/pro/acme-widgets",
            &[
                "https://www.guildquality.com/pro/acme-widgets",
                "guildquality.com/pro/acme-widgets",
                "acme-widgets",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?guildquality\.com/pro/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        // Real estate and automotive
        entry(
            "zillow",
            "https://www.zillow.com/profile/AcmeRealty",
            &[
                "https://www.zillow.com/profile/AcmeRealty",
                "zillow.com/profile/AcmeRealty",
                "AcmeRealty",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?zillow\.com/profile/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9._-]*)$",
            ],
            true,
        ),
        entry(
            "realtor",
            "https://www.realtor.com/realestateagents/56b62fbb89a68901006e5351",
            &[
                "https://www.realtor.com/realestateagents/56b62fbb89a68901006e5351",
                "realtor.com/realestateagents/56b62fbb89a68901006e5351",
                "56b62fbb89a68901006e5351",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?realtor\.com/realestateagents/([0-9a-f]{24})/?(?:[?#].*)?$",
                r"^([0-9a-f]{24})$",
            ],
            false,
        ),
        entry(
            "dealerrater",
            "https://www.dealerrater.com/dealer/Acme-Motors-review-28493/",
            &[
                "https://www.dealerrater.com/dealer/Acme-Motors-review-28493/",
                "dealerrater.com/dealer/Acme-Motors-review-28493/",
                "28493",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?dealerrater\.[a-z.]+/dealer/[^/?#]*-review-(\d+)/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "cars",
            "https://www.cars.com/dealers/5284931/acme-motors/",
            &[
                "https://www.cars.com/dealers/5284931/acme-motors/",
                "cars.com/dealers/5284931/acme-motors/",
                "5284931",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?cars\.com/dealers/(\d+)(?:/[^?#]*)?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "cargurus",
            "https://www.cargurus.com/Cars/m-Acme-Motors-sp284931",
            &[
                "https://www.cargurus.com/Cars/m-Acme-Motors-sp284931",
                "cargurus.com/Cars/m-Acme-Motors-sp284931",
                "284931",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?cargurus\.com/Cars/m-[^/?#]*-sp(\d+)/?(?:[?#].*)?$",
                r"^(?:sp)?(\d+)$",
            ],
            false,
        ),
        entry(
            "edmunds",
            "https://www.edmunds.com/dealerships/all/california/sandiego/acme-motors_1/",
            &[
                "https://www.edmunds.com/dealerships/all/california/sandiego/acme-motors_1/",
                "edmunds.com/dealerships/all/california/sandiego/acme-motors_1/",
                "acme-motors_1",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?edmunds\.com/dealerships/(?:[^/?#]+/)*([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9_-]*)$",
            ],
            true,
        ),
        entry(
            "carfax",
            "https://www.carfax.com/dealer/Sunset-Motors-LLC",
            &[
                "https://www.carfax.com/dealer/Sunset-Motors-LLC",
                "carfax.com/dealer/Sunset-Motors-LLC",
                "Sunset-Motors-LLC",
            ],
            &[
                r"@^(?:https?://)?(?:www\.)?carfax\.com/dealer/([a-z0-9-]+)/?(?:[?#].*)?$@i",
                r"@^([a-z0-9-]+)$@i",
            ],
            false,
        ),
        // Weddings, schools, nonprofits, care
        entry(
            "weddingwire",
            "https://www.weddingwire.com/biz/acme-gardens-san-diego/8f2a7c1b9e3d5a40.html",
            &[
                "https://www.weddingwire.com/biz/acme-gardens-san-diego/8f2a7c1b9e3d5a40.html",
                "weddingwire.com/biz/acme-gardens-san-diego/8f2a7c1b9e3d5a40.html",
                "acme-gardens-san-diego",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?weddingwire\.com/biz/([^/?#\s]+)(?:/[0-9a-f]+\.html)?/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "theknot",
            "https://www.theknot.com/marketplace/acme-gardens-san-diego-ca-2849301",
            &[
                "https://www.theknot.com/marketplace/acme-gardens-san-diego-ca-2849301",
                "theknot.com/marketplace/acme-gardens-san-diego-ca-2849301",
                "acme-gardens-san-diego-ca-2849301",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?theknot\.com/marketplace/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "greatschools",
            "https://www.greatschools.org/california/san-diego/2849-Acme-Charter-School/",
            &[
                "https://www.greatschools.org/california/san-diego/2849-Acme-Charter-School/",
                "greatschools.org/california/san-diego/2849-Acme-Charter-School/",
                "2849",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?greatschools\.org/[^/?#]+/[^/?#]+/(\d+)-[^/?#]*/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "niche",
            "https://www.niche.com/k12/acme-charter-school-san-diego-ca/",
            &[
                "https://www.niche.com/k12/acme-charter-school-san-diego-ca/",
                "niche.com/k12/acme-charter-school-san-diego-ca/",
                "acme-charter-school-san-diego-ca",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?niche\.com/(?:k12|colleges|places-to-live|companies)/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "greatnonprofits",
            "https://greatnonprofits.org/org/acme-foundation",
            &[
                "https://greatnonprofits.org/org/acme-foundation",
                "greatnonprofits.org/org/acme-foundation",
                "acme-foundation",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?greatnonprofits\.org/org/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "guidestar",
            "https://www.guidestar.org/profile/95-2849301",
            &[
                "https://www.guidestar.org/profile/95-2849301",
                "guidestar.org/profile/95-2849301",
                "95-2849301",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?guidestar\.org/profile/(\d{2}-\d{7})/?(?:[?#].*)?$",
                r"^(\d{2}-\d{7})$",
            ],
            false,
        ),
        entry(
            "caring",
            "https://www.caring.com/senior-living/california/san-diego/acme-senior-living",
            &[
                "https://www.caring.com/senior-living/california/san-diego/acme-senior-living",
                "caring.com/senior-living/california/san-diego/acme-senior-living",
                "acme-senior-living",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?caring\.com/[^/?#]+/[^/?#]+/[^/?#]+/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        // Beauty and wellness
        entry(
            "booksy",
            "https://booksy.com/en-us/284931_acme-salon_hair-salon_134763_san-diego",
            &[
                "https://booksy.com/en-us/284931_acme-salon_hair-salon_134763_san-diego",
                "booksy.com/en-us/284931_acme-salon_hair-salon_134763_san-diego",
                "284931",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?booksy\.com/[a-z-]+/(\d+)_[^/?#]*/?(?:[?#].*)?$",
                r"^(\d+)$",
            ],
            false,
        ),
        entry(
            "treatwell",
            "https://www.treatwell.co.uk/place/acme-salon/",
            &[
                "https://www.treatwell.co.uk/place/acme-salon/",
                "treatwell.co.uk/place/acme-salon/",
                "acme-salon",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?treatwell\.[a-z.]+/place/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "fresha",
            "https://www.fresha.com/a/acme-salon-san-diego-xkcd123",
            &[
                "https://www.fresha.com/a/acme-salon-san-diego-xkcd123",
                "fresha.com/a/acme-salon-san-diego-xkcd123",
                "acme-salon-san-diego-xkcd123",
            ],
            &[
                r"^(?:https?://)?(?:www\.)?fresha\.com/a/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
        entry(
            "vagaro",
            "https://www.vagaro.com/acmesalon",
            &[
                "https://www.vagaro.com/acmesalon",
                "vagaro.com/acmesalon",
                "acmesalon",
            ],
            &[
                r"^(?:https?://)?(?:[a-z]{2}\.|www\.)?vagaro\.com/([^/?#\s]+)/?(?:[?#].*)?$",
                r"^([A-Za-z0-9][A-Za-z0-9-]*)$",
            ],
            true,
        ),
    ]
}
