mod classify;
pub mod id;
pub mod natural;

pub use classify::{classify, Video, VIDEO_EXTENSIONS};
use serde::{Deserialize, Serialize};

use crate::filesystem::{self, path};

/// A folder that directly contains at least one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub path: String,
    pub videos: Vec<Video>,
}

/// Collects every course below `root`, depth-first in directory listing order.
///
/// Nested courses are flattened into the returned list. `root` itself is never a course and a
/// folder that can not be listed contributes nothing.
#[tracing::instrument(skip_all, fields(root = root.as_str()))]
pub fn scan(root: &path::Local, base: &path::Relative) -> Vec<Course> {
    let mut courses = vec![];
    scan_folder(root, base, &mut courses);
    tracing::debug!(courses = courses.len(), "finish scanning");
    courses
}

fn scan_folder(folder: &path::Local, base: &path::Relative, courses: &mut Vec<Course>) {
    let entries = match filesystem::list_folder(folder) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::error!(folder = folder.as_str(), scan_list_folder_error = ?error);
            return;
        }
    };

    for entry in entries.into_iter().filter(|entry| entry.file_type.is_dir()) {
        let folder = folder.join(entry.name.as_str());
        let path = base.join(entry.name.as_str());

        let videos = classify(&folder, &path);
        if !videos.is_empty() {
            courses.push(Course {
                id: id::encode(&path),
                name: entry.name,
                path: path.as_str().to_owned(),
                videos,
            });
        }

        scan_folder(&folder, &path, courses);
    }
}

#[cfg(test)]
mod tests {
    use concat_string::concat_string;
    use fake::faker::lorem::en::Word;
    use fake::Fake;
    use itertools::Itertools;
    use rstest::rstest;

    use super::*;
    use crate::test::filesystem::{mock, Mock};

    fn scan_root(mock: &Mock) -> Vec<Course> {
        scan(mock.prefix(), path::Relative::new(""))
    }

    fn summary(courses: &[Course]) -> Vec<(&str, Vec<&str>)> {
        courses
            .iter()
            .map(|course| {
                (
                    course.path.as_str(),
                    course.videos.iter().map(|video| video.name.as_str()).collect_vec(),
                )
            })
            .collect_vec()
    }

    #[rstest]
    fn test_scan(mock: Mock) {
        mock.write("CourseA/1.mp4");
        mock.write("CourseA/2.mp4");
        mock.write("CourseA/Sub/3.mp4");
        mock.create_dir("Empty");

        let courses = scan_root(&mock);
        assert_eq!(summary(&courses), [("CourseA", vec!["1", "2"]), ("CourseA/Sub", vec!["3"])]);

        assert_eq!(courses[0].name, "CourseA");
        assert_eq!(courses[1].name, "Sub");
        assert_eq!(courses[1].videos[0].path, "CourseA/Sub/3.mp4");
        assert_eq!(courses[1].videos[0].filename, "3.mp4");
    }

    #[rstest]
    fn test_scan_recurse_without_videos(mock: Mock) {
        mock.write("Outer/notes.txt");
        mock.write("Outer/Middle/Inner/1.mkv");

        assert_eq!(summary(&scan_root(&mock)), [("Outer/Middle/Inner", vec!["1"])]);
    }

    #[rstest]
    fn test_scan_ignore_root_files(mock: Mock) {
        mock.write("loose.mp4");
        mock.write("Course/1.mp4");

        assert_eq!(summary(&scan_root(&mock)), [("Course", vec!["1"])]);
    }

    #[rstest]
    fn test_scan_depth_first(mock: Mock) {
        mock.write("A/1.mp4");
        mock.write("A/B/1.mp4");
        mock.write("A/B/C/1.mp4");

        assert_eq!(
            scan_root(&mock).into_iter().map(|course| course.path).collect_vec(),
            ["A", "A/B", "A/B/C"]
        );
    }

    #[rstest]
    fn test_scan_base(mock: Mock) {
        mock.write("Course/1.mp4");

        let courses = scan(mock.prefix(), path::Relative::new("prefix"));
        assert_eq!(courses[0].path, "prefix/Course");
        assert_eq!(courses[0].videos[0].path, "prefix/Course/1.mp4");
    }

    #[rstest]
    fn test_scan_missing_root(mock: Mock) {
        assert!(scan(&mock.prefix().join("missing"), path::Relative::new("")).is_empty());
    }

    #[rstest]
    fn test_scan_file_root(mock: Mock) {
        let file = mock.write("video.mp4");
        assert!(scan(&file, path::Relative::new("")).is_empty());
    }

    #[cfg(unix)]
    #[rstest]
    fn test_scan_skip_symlink(mock: Mock) {
        mock.write("Course/1.mp4");
        std::os::unix::fs::symlink(
            mock.prefix().join("Course").as_str(),
            mock.prefix().join("Link").as_str(),
        )
        .unwrap();

        assert_eq!(summary(&scan_root(&mock)), [("Course", vec!["1"])]);
    }

    #[rstest]
    fn test_scan_idempotent_and_ids(mock: Mock) {
        for _ in 0..50 {
            let depth = (1usize..4).fake::<usize>();
            let folder = (0..depth).map(|_| Word().fake::<String>()).join("/");
            let filename = concat_string!(
                (1u8..20).fake::<u8>().to_string(),
                ".",
                VIDEO_EXTENSIONS[(0..VIDEO_EXTENSIONS.len()).fake::<usize>()]
            );
            mock.write(&concat_string!(folder, "/", filename));
        }

        let courses = scan_root(&mock);
        assert!(!courses.is_empty());
        assert_eq!(courses, scan_root(&mock));

        assert!(courses.iter().map(|course| &course.id).all_unique());
        for course in &courses {
            assert_eq!(id::decode(&course.id), course.path);
            for video in &course.videos {
                assert_eq!(id::decode(&video.id), video.path);
                assert_eq!(video.path, concat_string!(course.path, "/", video.filename));
            }
            assert!(course
                .videos
                .iter()
                .tuple_windows()
                .all(|(a, b)| natural::compare(&a.name, &b.name).is_le()));
        }
    }
}
