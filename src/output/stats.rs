//! Statistics reporting.

use console::style;

use crate::dispose::Summary;

/// Print the final statistics for a run.
pub fn print_run_stats(summary: &Summary) {
    println!();
    println!("{}", style("Statistics:").bold());
    println!("  Total images processed:         {}", summary.total_images);
    println!("  Duplicates found and processed: {}", summary.duplicates);
    println!("  Unique images remaining:        {}", summary.unique_images());

    if summary.moved_count() > 0 {
        println!("  Moved:   {}", style(summary.moved_count()).green());
    }
    if summary.deleted_count() > 0 {
        println!("  Deleted: {}", style(summary.deleted_count()).green());
    }
    if summary.skipped_count() > 0 {
        println!("  Skipped: {} (already gone)", summary.skipped_count());
    }
    if summary.failed_count() > 0 {
        println!("  Failed:  {}", style(summary.failed_count()).red());
    }

    if let Some(dir) = &summary.trash_dir {
        println!();
        println!(
            "Duplicate files have been moved to: {}",
            style(dir.display()).bold()
        );
    } else if summary.deleted_count() > 0 {
        println!();
        println!("Duplicate files have been deleted");
    }
}
