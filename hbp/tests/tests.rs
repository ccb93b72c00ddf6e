#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use hbp::batch;
    use hbp::config::HBPConfig;
    use hbp::io;
    use hbp::opt::hbp_optimizer::HeuristicOptimizer;
    use hbp::opt::order::{bin_preference_order, item_placement_order};
    use hbp::opt::selector;
    use rectpack::entities::{Bin, Instance, Item, Solution};
    use rectpack::free_space::{Guillotine, MaxRects, PackingStrategy, StrategyKind};
    use rectpack::util::assertions;

    fn load(instance_path: &str) -> Instance {
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        rectpack::io::import(&ext_instance).unwrap()
    }

    fn run<S: PackingStrategy>(instance: &Instance, strategy: S) -> Solution {
        let item_order = item_placement_order(instance);
        let bin_order = bin_preference_order(instance);
        HeuristicOptimizer::new(instance, strategy, &item_order, &bin_order).solve()
    }

    fn build_instance(items: &[(u64, u64)], bins: &[(u64, u64, u64)]) -> Instance {
        Instance::new(
            items
                .iter()
                .enumerate()
                .map(|(id, &(w, h))| Item::new(id, w, h))
                .collect(),
            bins.iter()
                .enumerate()
                .map(|(id, &(w, h, c))| Bin::new(id, w, h, c))
                .collect(),
        )
    }

    fn check_solution(instance: &Instance, solution: &Solution) {
        assert!(assertions::solution_matches_layouts(solution));
        for layout in solution.layouts.iter() {
            assert!(assertions::placed_items_within_bin(layout));
            assert!(assertions::placed_items_disjoint(layout));
            assert!(assertions::free_rects_avoid_items(layout));
            for pi in layout.placed_items.iter() {
                // footprint matches the item dimensions in the recorded orientation
                let (w, h) = instance.item(pi.item_id).shape(pi.rotated);
                assert_eq!((pi.rect.width(), pi.rect.height()), (w, h));
            }
        }
        // each used bin is paid once
        let cost = solution.layouts.iter().map(|l| l.bin.cost).sum::<u64>();
        assert_eq!(solution.cost(), cost);
        assert_eq!(
            solution.n_placed_items() + solution.unplaced_items().count(),
            instance.items.len()
        );
        // bins left empty were tried for every item, so an unplaced item fits in none of them
        for item_id in solution.unplaced_items() {
            let item = instance.item(item_id);
            let unused_bins = instance
                .bins
                .iter()
                .filter(|b| solution.layouts.iter().all(|l| l.bin.id != b.id));
            for bin in unused_bins {
                assert!(!item.fits_in(bin.width, bin.height));
            }
        }
    }

    #[test_case("../assets/small.txt"; "small")]
    #[test_case("../assets/mixed_bins.txt"; "mixed_bins")]
    #[test_case("../assets/oversized.txt"; "oversized")]
    #[test_case("../assets/uniform.txt"; "uniform")]
    #[test_case("../assets/stress.txt"; "stress")]
    #[test_case("../assets/scenario_a.json"; "scenario_a")]
    fn test_instance(instance_path: &str) {
        let instance = load(instance_path);

        let guillotine = run(&instance, Guillotine);
        check_solution(&instance, &guillotine);
        for layout in guillotine.layouts.iter() {
            assert!(assertions::guillotine_free_space_exact(layout));
        }

        let maxrects = run(&instance, MaxRects);
        check_solution(&instance, &maxrects);
        for layout in maxrects.layouts.iter() {
            assert!(assertions::no_contained_free_rects(layout));
        }

        let selection = selector::solve(&instance, &HBPConfig::default());
        check_solution(&instance, &selection.chosen);
        assert_eq!(selection.guillotine.cost, guillotine.cost());
        assert_eq!(selection.maxrects.cost, maxrects.cost());
        assert_eq!(
            selection.chosen.cost(),
            u64::min(guillotine.cost(), maxrects.cost())
        );
        match guillotine.cost() < maxrects.cost() {
            true => assert_eq!(selection.chosen.strategy, StrategyKind::Guillotine),
            false => assert_eq!(selection.chosen.strategy, StrategyKind::MaxRects),
        }
    }

    #[test_case("../assets/small.txt"; "small")]
    #[test_case("../assets/mixed_bins.txt"; "mixed_bins")]
    #[test_case("../assets/stress.txt"; "stress")]
    fn test_determinism(instance_path: &str) {
        let instance = load(instance_path);
        let sequential = HBPConfig::default();
        let parallel = HBPConfig {
            parallel: true,
            ..HBPConfig::default()
        };

        let listings = [&sequential, &sequential, &parallel].map(|config| {
            let selection = selector::solve(&instance, config);
            rectpack::io::placement_lines(&selection.chosen)
        });
        assert_eq!(listings[0], listings[1]);
        assert_eq!(listings[0], listings[2]);
    }

    #[test]
    fn scenario_a_single_bin() {
        let instance = build_instance(&[(6, 4), (4, 4)], &[(10, 10, 5)]);
        let selection = selector::solve(&instance, &HBPConfig::default());
        let solution = &selection.chosen;

        assert_eq!(solution.n_placed_items(), 2);
        assert!(solution.placed_items().all(|pi| pi.bin_id == 0));
        assert_eq!(solution.cost(), 5);
        assert_eq!(solution.bins_used(), 1);
        assert!(approx_eq!(f32, solution.density(&instance), 0.4, ulps = 2));
    }

    #[test]
    fn scenario_b_cheaper_bin_that_fits() {
        let instance = build_instance(&[(8, 8)], &[(5, 5, 10), (10, 10, 3)]);
        let selection = selector::solve(&instance, &HBPConfig::default());
        let solution = &selection.chosen;

        assert_eq!(solution.placements[0].unwrap().bin_id, 1);
        assert_eq!(solution.cost(), 3);
        assert_eq!(solution.bins_used(), 1);
        assert_eq!(rectpack::io::placement_lines(solution), "1 2 0 0 0\n");
    }

    #[test]
    fn scenario_c_rotation_to_fit() {
        let instance = build_instance(&[(7, 3)], &[(4, 8, 1)]);
        for solution in [run(&instance, Guillotine), run(&instance, MaxRects)] {
            let pi = solution.placements[0].unwrap();
            assert!(pi.rotated);
            let (x, y) = pi.corner();
            assert!(x < 4 && y < 8);
            assert_eq!((pi.rect.width(), pi.rect.height()), (3, 7));
        }
        let selection = selector::solve(&instance, &HBPConfig::default());
        assert_eq!(
            rectpack::io::placement_lines(&selection.chosen),
            "1 1 0 0 1\n"
        );
    }

    #[test]
    fn scenario_d_item_larger_than_every_bin() {
        let instance = build_instance(&[(20, 20)], &[(5, 5, 1), (10, 4, 2)]);
        let selection = selector::solve(&instance, &HBPConfig::default());
        let solution = &selection.chosen;

        assert_eq!(solution.cost(), 0);
        assert_eq!(solution.bins_used(), 0);
        assert_eq!(solution.unplaced_items().collect::<Vec<_>>(), vec![0]);
        assert_eq!(rectpack::io::placement_lines(solution), "");

        // the other items still pay only for the bins they use
        let instance = build_instance(&[(20, 20), (2, 2)], &[(5, 5, 1), (10, 4, 2)]);
        let selection = selector::solve(&instance, &HBPConfig::default());
        assert_eq!(selection.chosen.cost(), 1);
        assert_eq!(
            rectpack::io::placement_lines(&selection.chosen),
            "2 1 0 0 0\n"
        );
    }

    #[test]
    fn ties_keep_maximal_rectangles() {
        let instance = build_instance(&[(2, 2), (2, 2)], &[(4, 4, 6)]);
        let guillotine = run(&instance, Guillotine);
        let maxrects = run(&instance, MaxRects);
        assert_eq!(guillotine.cost(), maxrects.cost());

        let selection = selector::select(guillotine, maxrects);
        assert_eq!(selection.chosen.strategy, StrategyKind::MaxRects);
    }

    #[test]
    fn export_uses_one_based_ids() {
        let instance = load("../assets/oversized.txt");
        let selection = selector::solve(&instance, &HBPConfig::default());
        let ext_solution = rectpack::io::export(&instance, &selection.chosen, *hbp::EPOCH);

        // items 2 (30x2) and 4 (25x25) fit in neither bin
        assert_eq!(ext_solution.unplaced_items, vec![2, 4]);
        assert_eq!(ext_solution.placements.len(), 2);
        assert!(
            ext_solution
                .placements
                .iter()
                .all(|p| p.item_id >= 1 && p.bin_id >= 1)
        );
        assert_eq!(ext_solution.cost, selection.chosen.cost());
    }

    #[test]
    fn largest_representable_bins_are_packed() {
        let side = u32::MAX as u64;
        let instance = build_instance(&[(side, 1), (3, 3)], &[(side, side, 1), (4, 4, 9)]);
        for solution in [run(&instance, Guillotine), run(&instance, MaxRects)] {
            check_solution(&instance, &solution);
            assert_eq!(solution.cost(), 1);
            assert_eq!(solution.n_placed_items(), 2);
        }
        let selection = selector::solve(&instance, &HBPConfig::default());
        assert!(selection.chosen.density(&instance) > 0.0);
    }

    #[test]
    fn overflowing_instances_are_rejected() {
        let text = "1 2\n3 3\n5000000000 5000000000 1\n4 4 1\n";
        assert!(rectpack::io::parser::parse_instance(text, "huge").is_err());
    }

    #[test]
    fn malformed_instance_is_rejected() {
        assert!(io::read_instance(Path::new("../assets/malformed.txt")).is_err());
    }

    #[test]
    fn batch_records_failures_and_continues() {
        let solution_folder = std::env::temp_dir().join("hbp_batch_test");
        std::fs::create_dir_all(&solution_folder).unwrap();
        let config = HBPConfig {
            svg_export: false,
            ..HBPConfig::default()
        };

        let entries =
            batch::solve_folder(Path::new("../assets"), &config, &solution_folder).unwrap();

        assert_eq!(entries.len(), 7);
        let failed = entries.iter().filter(|e| e.error.is_some()).collect::<Vec<_>>();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].file_name, "malformed.txt");

        let scenario_a = entries
            .iter()
            .find(|e| e.file_name == "scenario_a.json")
            .unwrap();
        assert_eq!(scenario_a.cost, Some(5));
        assert_eq!(scenario_a.n, Some(2));
        assert_eq!(scenario_a.k, Some(1));

        assert!(solution_folder.join("summary.json").exists());
        assert!(solution_folder.join("sol_small.txt").exists());
        assert!(solution_folder.join("sol_small.json").exists());
    }
}
