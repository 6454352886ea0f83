use std::fs::{self, File};

use portfolio_site::{blog::get_meta, rss::build_channel};

fn main() {
    let posts = get_meta().expect("Should be able to get blog posts");
    let channel = build_channel(posts);

    fs::create_dir_all("public").expect("Should be able to create public dir");
    let file = File::create("public/rss.xml").expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
}
